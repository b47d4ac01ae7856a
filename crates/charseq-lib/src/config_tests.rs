use indoc::indoc;

use charseq_core::{Callback, Symbol, Value, callback};
use charseq_vm::ArgResolution;

use crate::config::{Config, ConfigError};
use crate::diagnostics::DiagnosticKind;

fn bind(name: &str) -> Option<Callback> {
    match name {
        "circle" | "rect" => Some(callback(|_| {})),
        _ => None,
    }
}

fn issue_kinds(config: &Config) -> Vec<DiagnosticKind> {
    config.issues().iter().map(|v| v.kind).collect()
}

#[test]
fn loads_full_config() {
    let text = indoc! {r#"
        {
            "sequence": "AaabBabcc",
            "operations": { "A": "circle", "B": "rect" },
            "values": { "a": 30, "b": 20, "c": 55 },
            "labels": { "circle": "A", "rect": 66 },
            "maxSequenceLength": 64,
            "ignoreWarnings": true,
            "strictMode": true,
            "argumentResolution": "truthiness"
        }
    "#};

    let config = Config::from_json(text, bind).unwrap();

    assert!(config.issues().is_empty());
    assert_eq!(config.sequence.as_ref().unwrap(), "AaabBabcc");
    let ops: Vec<&Symbol> = config.operations.iter().map(|(s, _)| s).collect();
    assert_eq!(ops, vec![&Symbol::from("A"), &Symbol::from("B")]);
    assert_eq!(
        config.values,
        vec![
            (Symbol::from("a"), Value::Int(30)),
            (Symbol::from("b"), Value::Int(20)),
            (Symbol::from("c"), Value::Int(55)),
        ]
    );
    assert_eq!(
        config.labels,
        vec![
            ("circle".to_owned(), Symbol::from("A")),
            ("rect".to_owned(), Symbol::Int(66)),
        ]
    );
    assert_eq!(config.max_sequence_length, Some(64));
    assert!(config.ignore_warnings);
    assert!(config.strict_mode);
    assert_eq!(config.argument_resolution, ArgResolution::Truthiness);
}

#[test]
fn empty_object_is_default() {
    let config = Config::from_json("{}", bind).unwrap();
    assert!(config.issues().is_empty());
    assert!(config.sequence.is_none());
    assert!(!config.strict_mode);
    assert_eq!(config.argument_resolution, ArgResolution::Presence);
}

#[test]
fn not_json_is_an_error() {
    let err = Config::from_json("{ sequence: ", bind).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("config is not valid JSON"));
}

#[test]
fn non_object_config_is_reported() {
    let config = Config::from_json("[1, 2]", bind).unwrap();
    assert_eq!(issue_kinds(&config), vec![DiagnosticKind::InvalidConfigField]);
    assert_eq!(
        config.issues()[0].to_string(),
        "invalid configuration field: config must be an object, got an array"
    );
}

#[test]
fn unknown_keys_are_reported() {
    let config = Config::from_json(r#"{ "strict": true, "sequence": "A" }"#, bind).unwrap();
    assert_eq!(issue_kinds(&config), vec![DiagnosticKind::UnknownConfigKey]);
    assert_eq!(
        config.issues()[0].to_string(),
        "unknown configuration key `strict`"
    );
    assert!(config.sequence.is_some());
}

#[test]
fn malformed_fields_keep_defaults() {
    let text = indoc! {r#"
        {
            "sequence": 12,
            "operations": [],
            "strictMode": "yes",
            "ignoreWarnings": 1,
            "argumentResolution": "loose",
            "maxSequenceLength": "ten"
        }
    "#};

    let config = Config::from_json(text, bind).unwrap();

    assert_eq!(
        issue_kinds(&config),
        vec![DiagnosticKind::InvalidConfigField; 6]
    );
    assert_eq!(
        config.issues()[2].to_string(),
        "invalid configuration field: `strictMode` must be a boolean, got a string"
    );
    assert!(config.sequence.is_none());
    assert!(config.operations.is_empty());
    assert!(!config.strict_mode);
    assert!(!config.ignore_warnings);
    assert_eq!(config.argument_resolution, ArgResolution::Presence);
    assert_eq!(config.max_sequence_length, None);
}

#[test]
fn non_positive_max_length() {
    let config = Config::from_json(r#"{ "maxSequenceLength": 0 }"#, bind).unwrap();
    assert_eq!(issue_kinds(&config), vec![DiagnosticKind::InvalidMaxLength]);
    assert_eq!(config.max_sequence_length, None);

    let config = Config::from_json(r#"{ "maxSequenceLength": -5 }"#, bind).unwrap();
    assert_eq!(issue_kinds(&config), vec![DiagnosticKind::InvalidMaxLength]);
}

#[test]
fn unbound_operation_names() {
    let text = r#"{ "operations": { "A": "circle", "B": "spiral", "C": 3 } }"#;
    let config = Config::from_json(text, bind).unwrap();

    assert_eq!(config.operations.len(), 1);
    assert_eq!(
        issue_kinds(&config),
        vec![DiagnosticKind::MissingCallback, DiagnosticKind::MissingCallback]
    );
    assert_eq!(
        config.issues()[0].hint.as_deref(),
        Some("no callback named `spiral`")
    );
    assert_eq!(
        config.issues()[1].hint.as_deref(),
        Some("expected an operation name, got a number")
    );
}

#[test]
fn label_symbols_keep_their_json_shape() {
    let config = Config::from_json(r#"{ "labels": { "x": true } }"#, bind).unwrap();
    assert_eq!(
        config.labels,
        vec![("x".to_owned(), Symbol::Invalid("true".to_owned()))]
    );
}

#[test]
fn builder() {
    let config = Config::new()
        .sequence("Aa")
        .operation('A', |_| {})
        .value('a', 1)
        .label("one", 'a')
        .max_sequence_length(4)
        .strict_mode(true)
        .ignore_warnings(true)
        .argument_resolution(ArgResolution::Truthiness);

    assert_eq!(config.operations.len(), 1);
    assert_eq!(config.values, vec![(Symbol::from('a'), Value::Int(1))]);
    assert_eq!(config.max_sequence_length, Some(4));
    assert!(config.strict_mode);
    assert!(config.issues().is_empty());
}
