//! Tests for validated configuration merging.

use std::time::Duration;

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["ddns-cf"];
    full.extend_from_slice(args);
    Cli::parse_from_iter(full)
}

fn complete_cli() -> Cli {
    cli(&[
        "--token",
        "secret",
        "--zone",
        "example.com",
        "--record",
        "home.example.com",
    ])
}

fn complete_toml() -> TomlConfig {
    TomlConfig::parse(
        r#"
        [cloudflare]
        token = "toml-secret"
        zone = "toml.example.com"
        record = "home.toml.example.com"
        "#,
    )
    .unwrap()
}

mod required_fields {
    use super::*;

    #[test]
    fn all_required_from_cli() {
        let config = ValidatedConfig::from_raw(&complete_cli(), None).unwrap();

        assert_eq!(config.zone, "example.com");
        assert_eq!(config.record, "home.example.com");
        assert_eq!(config.auth.to_str().unwrap(), "Bearer secret");
    }

    #[test]
    fn all_required_from_toml() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&complete_toml())).unwrap();

        assert_eq!(config.zone, "toml.example.com");
        assert_eq!(config.record, "home.toml.example.com");
        assert_eq!(config.auth.to_str().unwrap(), "Bearer toml-secret");
    }

    #[test]
    fn missing_token_is_fatal() {
        let error =
            ValidatedConfig::from_raw(&cli(&["--zone", "z.com", "--record", "r.z.com"]), None)
                .unwrap_err();

        assert!(matches!(
            error,
            ConfigError::MissingRequired {
                field: field::TOKEN,
                ..
            }
        ));
    }

    #[test]
    fn missing_zone_is_fatal() {
        let error =
            ValidatedConfig::from_raw(&cli(&["--token", "t", "--record", "r.z.com"]), None)
                .unwrap_err();

        assert!(matches!(
            error,
            ConfigError::MissingRequired {
                field: field::ZONE,
                ..
            }
        ));
    }

    #[test]
    fn missing_record_is_fatal() {
        let error = ValidatedConfig::from_raw(&cli(&["--token", "t", "--zone", "z.com"]), None)
            .unwrap_err();

        assert!(matches!(
            error,
            ConfigError::MissingRequired {
                field: field::RECORD,
                ..
            }
        ));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let toml = TomlConfig::parse(
            r#"
            [cloudflare]
            token = ""
            zone = "example.com"
            record = "home.example.com"
            "#,
        )
        .unwrap();

        let error = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap_err();

        assert!(matches!(
            error,
            ConfigError::MissingRequired {
                field: field::TOKEN,
                ..
            }
        ));
    }
}

mod precedence {
    use super::*;

    #[test]
    fn cli_wins_over_toml() {
        let config =
            ValidatedConfig::from_raw(&complete_cli(), Some(&complete_toml())).unwrap();

        assert_eq!(config.zone, "example.com");
        assert_eq!(config.auth.to_str().unwrap(), "Bearer secret");
    }

    #[test]
    fn toml_fills_fields_cli_omits() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--token", "cli-secret"]),
            Some(&complete_toml()),
        )
        .unwrap();

        assert_eq!(config.auth.to_str().unwrap(), "Bearer cli-secret");
        assert_eq!(config.zone, "toml.example.com");
    }

    #[test]
    fn poll_interval_cli_over_toml_over_default() {
        let toml = TomlConfig::parse("[monitor]\npoll_interval = 60").unwrap();

        let from_cli = ValidatedConfig::from_raw(
            &cli(&[
                "--token",
                "t",
                "--zone",
                "z.com",
                "--record",
                "r.z.com",
                "--poll-interval",
                "120",
            ]),
            Some(&toml),
        )
        .unwrap();
        assert_eq!(from_cli.poll_interval, Duration::from_secs(120));

        let from_toml = ValidatedConfig::from_raw(&complete_cli(), Some(&toml)).unwrap();
        assert_eq!(from_toml.poll_interval, Duration::from_secs(60));

        let from_default = ValidatedConfig::from_raw(&complete_cli(), None).unwrap();
        assert_eq!(from_default.poll_interval, Duration::from_secs(10));
    }
}

mod validation {
    use super::*;

    #[test]
    fn default_resolver_url_applies() {
        let config = ValidatedConfig::from_raw(&complete_cli(), None).unwrap();

        assert_eq!(config.resolver_url.as_str(), "https://ifconfig.io/ip");
    }

    #[test]
    fn invalid_resolver_url_is_rejected() {
        let mut args = complete_cli();
        args.resolver_url = Some("not a url".to_string());

        let error = ValidatedConfig::from_raw(&args, None).unwrap_err();

        assert!(matches!(error, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let mut args = complete_cli();
        args.poll_interval = Some(0);

        let error = ValidatedConfig::from_raw(&args, None).unwrap_err();

        assert!(matches!(
            error,
            ConfigError::InvalidDuration {
                field: "poll_interval",
                ..
            }
        ));
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let mut args = complete_cli();
        args.token = Some("bad\ntoken".to_string());

        let error = ValidatedConfig::from_raw(&args, None).unwrap_err();

        assert!(matches!(error, ConfigError::InvalidToken { .. }));
    }
}

mod secrecy {
    use super::*;

    #[test]
    fn display_redacts_the_token() {
        let config = ValidatedConfig::from_raw(&complete_cli(), None).unwrap();

        let rendered = config.to_string();

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("example.com"));
    }

    #[test]
    fn auth_header_is_marked_sensitive() {
        let config = ValidatedConfig::from_raw(&complete_cli(), None).unwrap();

        assert!(config.auth.is_sensitive());
        // Sensitive header values hide their contents from Debug output.
        assert!(!format!("{:?}", config.auth).contains("secret"));
    }
}

mod loading {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_merges_file_named_on_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [cloudflare]
            token = "file-secret"
            zone = "example.com"
            record = "home.example.com"
            "#
        )
        .unwrap();

        let args = cli(&["--config", file.path().to_str().unwrap()]);
        let config = ValidatedConfig::load(&args).unwrap();

        assert_eq!(config.auth.to_str().unwrap(), "Bearer file-secret");
    }

    #[test]
    fn load_fails_when_file_is_missing() {
        let args = cli(&["--config", "/nonexistent/ddns-cf.toml"]);

        let error = ValidatedConfig::load(&args).unwrap_err();

        assert!(matches!(error, ConfigError::FileRead { .. }));
    }

    #[test]
    fn written_default_config_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ddns-cf.toml");

        write_default_config(&path).unwrap();

        let config = TomlConfig::load(&path).unwrap();
        assert_eq!(config.monitor.poll_interval, Some(10));
    }
}
