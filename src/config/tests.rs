#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.conf_root, PathBuf::from("resources/conf"));
        assert_eq!(config.scripts_root, PathBuf::from("resources/scripts"));
        assert_eq!(config.app_jar, PathBuf::from("resources/app.jar"));
        assert_eq!(config.startup_timeout_secs, 300);
        assert_eq!(config.poll_interval_ms, 100);
        assert!(config.java_download_urls.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            startup_timeout_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.startup_timeout_secs, 60);
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.conf_root, PathBuf::from("resources/conf"));
    }

    #[test]
    fn test_toml_download_url_overrides() {
        let config: Config = toml::from_str(
            r#"
            app_jar = "build/app/app.jar"

            [java_download_urls]
            amd64 = "https://example.com/jdk-amd64.tar.gz"
            aarch64 = "https://example.com/jdk-aarch64.tar.gz"
            "#,
        )
        .unwrap();
        assert_eq!(config.app_jar, PathBuf::from("build/app/app.jar"));
        assert_eq!(
            config.java_download_urls.get("amd64").unwrap(),
            "https://example.com/jdk-amd64.tar.gz"
        );
        assert_eq!(config.java_download_urls.len(), 2);
    }
}
