use crate::Config;

use super::{EnvGuard, setup_config_dir};

use serial_test::serial;

#[test]
#[serial]
fn test_defaults_when_no_file() {
    let (_temp, _guard) = setup_config_dir();

    let config = Config::load().unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:8002/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.storage.dir, "storage");
    assert!(config.logging.colored);
    assert!(config.logging.file.is_none());
    config.validate().unwrap();
}

#[test]
#[serial]
fn test_load_creates_config_dir() {
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested");
    let _inner = EnvGuard::set("TZ_CONFIG_DIR", nested.to_str().unwrap());

    Config::load().unwrap();
    assert!(nested.exists());
}

#[test]
#[serial]
fn test_load_from_toml() {
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
[api]
base_url = "https://taskzilla.example.com/api"
timeout_secs = 10

[logging]
level = "debug"
colored = false
"#,
    )
    .unwrap();

    let config = Config::load().unwrap();
    assert_eq!(config.api.base_url, "https://taskzilla.example.com/api");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(*config.logging.level, log::LevelFilter::Debug);
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn test_env_overrides_win_over_file() {
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"http://file.example.com/api\"\n",
    )
    .unwrap();

    let _url = EnvGuard::set("TZ_API_BASE_URL", "http://env.example.com/api");
    let _timeout = EnvGuard::set("TZ_API_TIMEOUT_SECS", "5");
    let _colored = EnvGuard::set("TZ_LOG_COLORED", "0");

    let config = Config::load().unwrap();
    assert_eq!(config.api.base_url, "http://env.example.com/api");
    assert_eq!(config.api.timeout_secs, 5);
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn test_unparseable_env_override_ignored() {
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("TZ_API_TIMEOUT_SECS", "not-a-number");

    let config = Config::load().unwrap();
    assert_eq!(config.api.timeout_secs, 30);
}

#[test]
#[serial]
fn test_invalid_toml_is_an_error() {
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "api = not valid {{").unwrap();

    assert!(Config::load().is_err());
}

#[test]
#[serial]
fn test_storage_dir_is_under_config_dir() {
    let (temp, _guard) = setup_config_dir();

    let config = Config::load().unwrap();
    let dir = config.storage_dir().unwrap();
    assert_eq!(dir, temp.path().join("storage"));
}
