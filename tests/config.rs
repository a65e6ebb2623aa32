#[cfg(test)]
mod tests {
    use dayplan::libs::config::{Config, TaskDefaults};
    use dayplan::libs::task::{Priority, Status};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join("config.json");
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.time, "09:00");
        assert_eq!(config.defaults.priority, Priority::Low);
        assert_eq!(config.defaults.status, Status::Pending);
        assert!(!config.validator().is_strict());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some(PathBuf::from("/tmp/planner.db")),
            defaults: TaskDefaults {
                time: "08:30".to_string(),
                priority: Priority::High,
                status: Status::InProgress,
            },
            strict_dates: true,
        };

        config.save_to(&ctx.config_path).unwrap();
        let loaded = Config::read_from(&ctx.config_path).unwrap();

        assert_eq!(loaded, config);
        assert!(loaded.validator().is_strict());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, r#"{ "strict_dates": true }"#).unwrap();

        let config = Config::read_from(&ctx.config_path).unwrap();

        assert!(config.strict_dates);
        assert_eq!(config.defaults, TaskDefaults::default());
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.config_path).is_err());
    }
}
