use std::io::Write;

use charseq_lib::{Colors, Value};

use super::config_loader::{CallbackMode, format_call, load_config};

#[test]
fn formats_calls() {
    let args = vec![Some(Value::Int(30)), None, Some(Value::from("x"))];
    assert_eq!(
        format_call("circle", &args, Colors::OFF),
        "circle(30, -, \"x\")"
    );
    assert_eq!(format_call("noop", &[], Colors::OFF), "noop()");
}

#[test]
fn loads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "sequence": "Aa", "operations": {{ "A": "circle" }}, "values": {{ "a": 1 }} }}"#
    )
    .unwrap();

    let config = load_config(file.path(), CallbackMode::Silent, Colors::OFF).unwrap();
    assert_eq!(config.operations.len(), 1);
    assert_eq!(config.values.len(), 1);
    assert!(config.issues().is_empty());
}

#[test]
fn missing_file() {
    let err = load_config(
        std::path::Path::new("/nonexistent/charseq.json"),
        CallbackMode::Silent,
        Colors::OFF,
    )
    .unwrap_err();
    assert!(err.starts_with("failed to read '/nonexistent/charseq.json'"));
}

#[test]
fn invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = load_config(file.path(), CallbackMode::Silent, Colors::OFF).unwrap_err();
    assert!(err.contains("config is not valid JSON"));
}
