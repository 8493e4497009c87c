//! ANSI color escapes as launch scripts print them, and the substring
//! checks the tests assert with.

use std::fmt;

#[cfg(test)]
mod tests;

/// The escape character starting an ANSI sequence
pub const ESC: char = '\x1b';

/// Standard ANSI foreground colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Build the exact sequence a script prints for colored text:
/// `ESC[0;<color>m<text>ESC[0m`
pub fn colored(color: AnsiColor, text: &str) -> String {
    format!("{ESC}[0;{color}m{text}{ESC}[0m")
}

/// Whether the captured output contains `text` in the given foreground color
pub fn contains_colored(output: &str, color: AnsiColor, text: &str) -> bool {
    output.contains(&colored(color, text))
}

/// Whether the captured output reports a successful launch
pub fn launched(output: &str) -> bool {
    output.contains("Launched")
}
