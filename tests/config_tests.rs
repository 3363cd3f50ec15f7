//! Integration tests for configuration management

use grade_analyzer::config::{Config, ConfigOverrides};
use grade_analyzer::logger::Level;

#[test]
fn test_defaults_name_a_known_log_level() {
    let config = Config::from_defaults();
    assert!(
        Level::parse(&config.logging.level).is_some(),
        "Default log level {:?} should be a known level",
        config.logging.level
    );
}

#[test]
fn test_logging_section_parsing() {
    let full = Config::from_toml(
        r#"
[logging]
level = "info"
file = "/tmp/grades.log"
verbose = true
"#,
    )
    .expect("Failed to parse TOML");
    assert_eq!(full.logging.level, "info");
    assert_eq!(full.logging.file, "/tmp/grades.log");
    assert!(full.logging.verbose);

    // Missing keys and a missing section fall back to serde defaults
    let partial = Config::from_toml("[logging]\nlevel = \"error\"\n").expect("partial TOML");
    assert_eq!(partial.logging.file, "");
    assert!(!partial.logging.verbose);
    assert!(Config::from_toml("").expect("empty TOML").logging.level.is_empty());

    assert!(Config::from_toml("[logging\nlevel = ").is_err());
    assert!(Config::from_toml("[logging]\nverbose = \"sometimes\"").is_err());
}

#[test]
fn test_log_file_expands_config_dir() {
    let config = Config::from_toml("[logging]\nfile = \"$GRADE_ANALYZER/logs/session.log\"\n")
        .expect("Failed to parse TOML with variables");

    let expected = Config::get_config_dir().join("logs/session.log");
    assert_eq!(config.logging.file, expected.to_string_lossy());
}

#[test]
fn test_get_set_unset_by_key() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("verbose", "true").expect("Failed to set verbose");
    config.set("file", "/var/log/grades.log").expect("Failed to set file");
    assert_eq!(config.get("level").as_deref(), Some("error"));
    assert_eq!(config.get("verbose").as_deref(), Some("true"));
    assert_eq!(config.get("file").as_deref(), Some("/var/log/grades.log"));

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("endpoint", "https://example.com").is_err());
    assert!(config.get("metrics_dir").is_none());

    config.unset("level", &defaults).expect("Failed to unset level");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert!(config.unset("token", &defaults).is_err());
}

#[test]
fn test_overrides_only_replace_given_values() {
    let mut config = Config::from_toml("[logging]\nlevel = \"warn\"\nfile = \"/keep.log\"\n")
        .expect("Failed to parse TOML");

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        verbose: Some(true),
        ..Default::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "/keep.log");
    assert!(config.logging.verbose);
}

#[test]
fn test_merge_defaults_fills_only_empty_fields() {
    let defaults = Config::from_defaults();

    let mut blank = Config::from_toml("[logging]\nlevel = \"\"\n").expect("blank config");
    assert!(blank.merge_defaults(&defaults));
    assert_eq!(blank.logging.level, defaults.logging.level);

    let mut custom = Config::from_toml("[logging]\nlevel = \"error\"\nfile = \"/my.log\"\n")
        .expect("custom config");
    assert!(!custom.merge_defaults(&defaults));
    assert_eq!(custom.logging.level, "error");
    assert_eq!(custom.logging.file, "/my.log");
}

#[test]
fn test_display_lists_logging_keys() {
    let display_str = Config::from_defaults().to_string();
    assert!(display_str.starts_with("[logging]\n"));
    for key in ["level", "file", "verbose"] {
        assert!(display_str.contains(key), "missing {key}");
    }
}

#[test]
fn test_config_file_lives_in_config_dir() {
    let dir = Config::get_config_dir();
    assert!(dir.ends_with("gradeanalyzer"));

    let path = Config::get_config_file_path();
    assert_eq!(path.parent(), Some(dir.as_path()));
    let name = path.file_name().and_then(|n| n.to_str());
    assert!(matches!(name, Some("config.toml" | "dconfig.toml")));
}
