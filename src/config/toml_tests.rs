//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = TomlConfig::parse(
            r#"
            [cloudflare]
            token = "secret"
            zone = "example.com"
            record = "home.example.com"

            [resolver]
            url = "https://icanhazip.com"

            [monitor]
            poll_interval = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.cloudflare.token.as_deref(), Some("secret"));
        assert_eq!(config.cloudflare.zone.as_deref(), Some("example.com"));
        assert_eq!(
            config.cloudflare.record.as_deref(),
            Some("home.example.com")
        );
        assert_eq!(config.resolver.url.as_deref(), Some("https://icanhazip.com"));
        assert_eq!(config.monitor.poll_interval, Some(30));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.cloudflare.token.is_none());
        assert!(config.cloudflare.zone.is_none());
        assert!(config.cloudflare.record.is_none());
        assert!(config.resolver.url.is_none());
        assert!(config.monitor.poll_interval.is_none());
    }

    #[test]
    fn parse_partial_section() {
        let config = TomlConfig::parse(
            r#"
            [cloudflare]
            zone = "example.com"
            "#,
        )
        .unwrap();

        assert!(config.cloudflare.token.is_none());
        assert_eq!(config.cloudflare.zone.as_deref(), Some("example.com"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = TomlConfig::parse(
            r#"
            [cloudflare]
            tokem = "typo"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn rejects_invalid_toml() {
        let result = TomlConfig::parse("not [valid toml");

        assert!(result.is_err());
    }
}

mod loading {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [cloudflare]
            token = "from-file"
            "#
        )
        .unwrap();

        let config = TomlConfig::load(file.path()).unwrap();

        assert_eq!(config.cloudflare.token.as_deref(), Some("from-file"));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let result = TomlConfig::load(std::path::Path::new("/nonexistent/ddns-cf.toml"));

        assert!(result.is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn template_is_valid_toml() {
        let template = default_config_template();

        let config = TomlConfig::parse(&template).unwrap();

        // Only the documented non-secret default is uncommented.
        assert!(config.cloudflare.token.is_none());
        assert_eq!(config.monitor.poll_interval, Some(10));
    }

    #[test]
    fn template_documents_every_section() {
        let template = default_config_template();

        assert!(template.contains("[cloudflare]"));
        assert!(template.contains("[resolver]"));
        assert!(template.contains("[monitor]"));
    }
}
