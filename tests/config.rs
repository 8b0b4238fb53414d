#[cfg(test)]
mod tests {
    use ptm::libs::config::{Config, CONFIG_FILE_NAME, DB_FILE_NAME};
    use ptm::libs::data_storage::DataStorage;
    use ptm::libs::messages::Language;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives each config test its own directory to act as the working directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir, storage }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.db_file_name, DB_FILE_NAME);
        assert_eq!(config.db_file_name, "tasks_database.json");
        assert_eq!(config.language, Language::En);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_in(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            db_file_name: "work_tasks.json".to_string(),
            language: Language::Vi,
        };
        config.save_in(&ctx.storage).unwrap();

        assert_eq!(Config::read_in(&ctx.storage).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.storage.get_path(CONFIG_FILE_NAME), r#"{ "language": "vi" }"#).unwrap();

        let config = Config::read_in(&ctx.storage).unwrap();
        assert_eq!(config.language, Language::Vi);
        assert_eq!(config.db_file_name, DB_FILE_NAME);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.storage.get_path(CONFIG_FILE_NAME), r#"{ "language": "fr" }"#).unwrap();

        let error = Config::read_in(&ctx.storage).unwrap_err();
        assert!(error.to_string().contains(CONFIG_FILE_NAME));
    }
}
