use pagesmith::{
    config::{get_config, parse_config, Config},
    engine::DEFAULT_MAX_ITERATIONS,
    error::Error,
    Value,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = parse_config("{}").unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.strict);
    assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    assert_eq!(config.base_name, "index");
    assert_eq!(config.page_settings().collection, None);
}

#[test]
fn test_parse_json_config() {
    let config = parse_config(
        r#"{"strict": true, "paginate": "photos", "page_size": 12, "context": {"title": "Trip"}}"#,
    )
    .unwrap();

    assert!(config.render_options().strict);
    let settings = config.page_settings();
    assert_eq!(settings.collection.as_deref(), Some("photos"));
    assert_eq!(settings.page_size, 12);
    assert_eq!(config.default_context().unwrap().get("title"), Some(&Value::from("Trip")));
}

#[test]
fn test_parse_yaml_config() {
    let config = parse_config("base_name: album\nmax_iterations: 50\n").unwrap();
    assert_eq!(config.base_name, "album");
    assert_eq!(config.render_options().max_iterations, 50);
}

#[test]
fn test_invalid_config() {
    assert!(matches!(parse_config("page_size: [1"), Err(Error::ConfigError(_))));
    assert!(matches!(parse_config("page_size: many"), Err(Error::ConfigError(_))));
}

#[test]
fn test_get_config() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(get_config(temp_dir.path()).unwrap(), Config::default());

    fs::write(temp_dir.path().join("pagesmith.yml"), "page_size: 4\n").unwrap();
    assert_eq!(get_config(temp_dir.path()).unwrap().page_size, 4);

    fs::write(temp_dir.path().join("pagesmith.json"), r#"{"page_size": 8}"#).unwrap();
    assert_eq!(get_config(temp_dir.path()).unwrap().page_size, 8);
}
