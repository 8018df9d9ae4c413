use pagesmith::{
    error::Error,
    loader::{load_context, load_template, parse_assignment},
    Value,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_template() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("page.html");
    fs::write(&path, "<h1>{{title}}</h1>").unwrap();

    assert_eq!(load_template(&path).unwrap(), "<h1>{{title}}</h1>");
    assert!(matches!(
        load_template(temp_dir.path().join("missing.html")),
        Err(Error::TemplateDoesNotExistError { .. })
    ));
}

#[test]
fn test_load_json_context() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("context.json");
    fs::write(&path, r#"{"title": "Trip", "photos": [{"file": "a.jpg"}]}"#).unwrap();

    let context = load_context(&path).unwrap();
    assert_eq!(context.get("title"), Some(&Value::from("Trip")));
    assert_eq!(context.get("photos").and_then(Value::as_list).map(|p| p.len()), Some(1));
}

#[test]
fn test_load_yaml_context() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("context.yml");
    fs::write(&path, "title: Trip\ncount: 2\nphotos:\n  - a.jpg\n  - b.jpg\n").unwrap();

    let context = load_context(&path).unwrap();
    assert_eq!(context.get("title"), Some(&Value::from("Trip")));
    assert_eq!(context.get("count"), Some(&Value::Int(2)));
    assert_eq!(context.get("photos"), Some(&Value::from(vec!["a.jpg", "b.jpg"])));
}

#[test]
fn test_load_context_rejects_non_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("context.json");
    fs::write(&path, "[1, 2]").unwrap();

    assert!(matches!(load_context(&path), Err(Error::ContextError(_))));
}

#[test]
fn test_parse_assignment() {
    assert_eq!(parse_assignment("count=3").unwrap(), ("count".to_string(), Value::Int(3)));
    assert_eq!(parse_assignment("flag=true").unwrap(), ("flag".to_string(), Value::Bool(true)));
    assert_eq!(
        parse_assignment("title=My album").unwrap(),
        ("title".to_string(), Value::from("My album"))
    );
    assert_eq!(parse_assignment("eq=a=b").unwrap(), ("eq".to_string(), Value::from("a=b")));
    assert!(parse_assignment("novalue").is_err());
    assert!(parse_assignment("=x").is_err());
}
