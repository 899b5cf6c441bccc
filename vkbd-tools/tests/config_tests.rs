use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use vkbd_tools::SessionConfig;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vkbd_{}_{}.toml", name, std::process::id()))
}

#[test]
fn test_load_from_file() {
    let path = temp_path("load");
    fs::write(&path, "language = \"tha\"\nhost_sink = false\n").unwrap();

    let config = SessionConfig::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(
        config,
        SessionConfig {
            locale: None,
            language: Some("tha".to_string()),
            show: true,
            host_sink: false,
        }
    );
}

#[test]
fn test_missing_file_names_the_path() {
    let path = temp_path("missing");
    let err = SessionConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains(&path.display().to_string()));
}

#[test]
fn test_serialized_config_reloads() {
    let config = SessionConfig {
        locale: Some("es-ES".to_string()),
        language: None,
        show: false,
        host_sink: true,
    };
    let text = config.to_toml().unwrap();
    assert_eq!(SessionConfig::from_toml(&text).unwrap(), config);
}
