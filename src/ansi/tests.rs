#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_colored_builds_exact_sequence() {
        assert_eq!(colored(AnsiColor::Green, "x"), "\x1b[0;32mx\x1b[0m");
        assert_eq!(
            colored(AnsiColor::Red, "Launch failed"),
            "\x1b[0;31mLaunch failed\x1b[0m"
        );
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(AnsiColor::Black.to_string(), "30");
        assert_eq!(AnsiColor::Green.to_string(), "32");
        assert_eq!(AnsiColor::White.to_string(), "37");
    }

    #[test]
    fn test_contains_colored() {
        let output = format!(
            "noise\n{}\nLaunched\n",
            colored(AnsiColor::Green, "Started app in 1.234 seconds")
        );
        assert!(contains_colored(
            &output,
            AnsiColor::Green,
            "Started app in 1.234 seconds"
        ));
        // Same text in a different color must not match
        assert!(!contains_colored(
            &output,
            AnsiColor::Yellow,
            "Started app in 1.234 seconds"
        ));
        // Uncolored occurrences must not match either
        assert!(!contains_colored(&output, AnsiColor::Green, "Launched"));
    }

    #[test]
    fn test_launched() {
        assert!(launched("some output\nLaunched\n"));
        assert!(!launched("some output\nLaunch failed\n"));
    }
}
