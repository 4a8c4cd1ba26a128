//! Tests for configuration loading.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use noughts::{Config, GameMode};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.mode(), &None);
    assert_eq!(config.ai_delay(), Duration::from_millis(500));
    assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
}

#[test]
fn test_parse_full_file() {
    let config = Config::from_toml(
        r#"
        mode = "player-vs-ai"
        ai_delay_ms = 250
        log_file = "game.log"
        "#,
    )
    .expect("valid config");

    assert_eq!(config.mode(), &Some(GameMode::PlayerVsAi));
    assert_eq!(*config.ai_delay_ms(), 250);
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_mode_aliases() {
    let config = Config::from_toml(r#"mode = "pvp""#).expect("valid config");
    assert_eq!(config.mode(), &Some(GameMode::PlayerVsPlayer));
    let config = Config::from_toml(r#"mode = "ai""#).expect("valid config");
    assert_eq!(config.mode(), &Some(GameMode::PlayerVsAi));
}

#[test]
fn test_rejects_excessive_delay() {
    let err = Config::from_toml("ai_delay_ms = 60000").unwrap_err();
    assert!(err.message.contains("ai_delay_ms"));
}

#[test]
fn test_rejects_unknown_mode() {
    assert!(Config::from_toml(r#"mode = "ai-vs-ai""#).is_err());
}

#[test]
fn test_load_from_file_and_missing_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "ai_delay_ms = 0").expect("write");

    let config = Config::load_or_default(file.path()).expect("load");
    assert_eq!(config.ai_delay(), Duration::ZERO);

    let dir = tempfile::tempdir().expect("temp dir");
    let missing = Config::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(missing, Config::default());
}

#[test]
fn test_cli_overrides() {
    let config = Config::default()
        .with_mode(Some(GameMode::PlayerVsAi))
        .with_ai_delay_ms(Some(100))
        .with_log_file(None);

    assert_eq!(config.mode(), &Some(GameMode::PlayerVsAi));
    assert_eq!(*config.ai_delay_ms(), 100);
    assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
}
