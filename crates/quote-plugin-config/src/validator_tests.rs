
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_invalid_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "server.port"));
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.server.host = String::new();

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "server.host"));
    }

    #[test]
    fn test_validate_zero_body_limit() {
        let mut config = Config::default();
        config.server.max_body_bytes = 0;

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "server.max_body_bytes"));
    }

    #[test]
    fn test_validate_blank_plugin_id() {
        let mut config = Config::default();
        config.plugin.id = "   ".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "plugin.id"));
    }

    #[test]
    fn test_validate_non_http_urls() {
        let mut config = Config::default();
        config.plugin.base_url = "127.0.0.1:3101".to_string();
        config.core.url = "ftp://core".to_string();

        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors.iter().any(|e| e.path == "plugin.base_url"));
        assert!(result.errors.iter().any(|e| e.path == "core.url"));
    }

    #[test]
    fn test_validate_https_accepted() {
        let mut config = Config::default();
        config.core.url = "https://core.example.com".to_string();

        assert!(ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_validate_zero_core_timeout() {
        let mut config = Config::default();
        config.core.timeout_secs = 0;

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "core.timeout_secs"));
    }

    #[test]
    fn test_validate_empty_description_warning() {
        let mut config = Config::default();
        config.plugin.description = String::new();

        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "plugin.description"));
    }

    #[test]
    fn test_into_result_joins_errors() {
        let mut config = Config::default();
        config.server.port = 0;
        config.plugin.id = String::new();

        let err = ConfigValidator::validate(&config).into_result().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("server.port"));
        assert!(message.contains("plugin.id"));
    }

    #[test]
    fn test_into_result_returns_warnings() {
        let mut config = Config::default();
        config.plugin.description = " ".to_string();

        let warnings = ConfigValidator::validate(&config).into_result().unwrap();
        assert_eq!(warnings.len(), 1);
    }
