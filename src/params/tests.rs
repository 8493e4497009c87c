#[cfg(test)]
mod tests {
    use super::super::*;
    use std::fs;
    use tempfile::tempdir;

    fn conf_tree() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Ubuntu/jammy-20230624")).unwrap();
        fs::create_dir_all(dir.path().join("Ubuntu/focal-20230801")).unwrap();
        fs::create_dir_all(dir.path().join("CentOS/7")).unwrap();
        // Stray files must never become parameters
        fs::write(dir.path().join("README.txt"), "ignore me").unwrap();
        fs::write(dir.path().join("Ubuntu/notes.md"), "ignore me too").unwrap();
        dir
    }

    #[test]
    fn test_parameters_emits_each_pair_once() {
        let dir = conf_tree();
        let mut pairs = parameters(dir.path(), |_| true).unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("CentOS".to_string(), "7".to_string()),
                ("Ubuntu".to_string(), "focal-20230801".to_string()),
                ("Ubuntu".to_string(), "jammy-20230624".to_string()),
            ]
        );
    }

    #[test]
    fn test_parameters_applies_os_filter() {
        let dir = conf_tree();
        let pairs = parameters(dir.path(), |os| os == "CentOS").unwrap();
        assert_eq!(pairs, vec![("CentOS".to_string(), "7".to_string())]);
    }

    #[test]
    fn test_parameters_filter_can_reject_everything() {
        let dir = conf_tree();
        let pairs = parameters(dir.path(), |_| false).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_parameters_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-conf");
        let err = parameters(&missing, |_| true).unwrap_err();
        assert!(err
            .to_string()
            .contains("Failed to list configuration root"));
    }
}
