use vectorcut_settings::{Config, SettingsError};

fn custom() -> Config {
    let mut config = Config::default();
    config.gcode.cut_feed_rate = 750.0;
    config.gcode.use_laser_mode = false;
    config.gcode.decimal_places = 2;
    config.flattening.curve_steps = 24;
    config
}

#[test]
fn test_toml_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    custom().save_to_file(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[gcode]"));
    assert!(text.contains("cut_feed_rate = 750.0"));

    assert_eq!(Config::load_from_file(&path).unwrap(), custom());
}

#[test]
fn test_json_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    custom().save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), custom());
}

#[test]
fn test_missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load_from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(SettingsError::LoadError(_))));
}

#[test]
fn test_malformed_files() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("bad.toml");
    std::fs::write(&toml_path, "[gcode\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&toml_path),
        Err(SettingsError::TomlDe(_))
    ));

    let json_path = dir.path().join("bad.json");
    std::fs::write(&json_path, "{ \"gcode\": ").unwrap();
    assert!(matches!(
        Config::load_from_file(&json_path),
        Err(SettingsError::Json(_))
    ));
}

#[test]
fn test_invalid_values_are_rejected_on_load_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[flattening]\ncurve_steps = 0\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Invalid(_))
    ));

    let mut config = Config::default();
    config.gcode.scale_factor = 0.0;
    assert!(matches!(
        config.save_to_file(&dir.path().join("out.toml")),
        Err(SettingsError::Invalid(_))
    ));
    assert!(!dir.path().join("out.toml").exists());
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::default().save_to_file(&dir.path().join("config.yaml"));
    assert!(matches!(result, Err(SettingsError::UnsupportedFormat(_))));
}
