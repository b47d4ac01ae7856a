//! Construction-time configuration.
//!
//! [`Config`] is built either in Rust with the builder methods or loaded from
//! JSON. Loading never fails on a malformed field: the problem is recorded and
//! the field keeps its default. Only text that is not JSON at all is an error.

use charseq_codec::Sequence;
use charseq_core::{Callback, Symbol, Value, callback};
use charseq_vm::ArgResolution;
use serde_json::Value as Json;

use crate::diagnostics::DiagnosticKind;
use crate::validate::{self, Violation};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Keys accepted by [`Config::from_json`].
pub const CONFIG_KEYS: &[&str] = &[
    "sequence",
    "operations",
    "values",
    "labels",
    "maxSequenceLength",
    "ignoreWarnings",
    "strictMode",
    "argumentResolution",
];

#[derive(Default)]
pub struct Config {
    pub sequence: Option<Sequence>,
    pub operations: Vec<(Symbol, Callback)>,
    pub values: Vec<(Symbol, Value)>,
    pub labels: Vec<(String, Symbol)>,
    pub max_sequence_length: Option<usize>,
    pub ignore_warnings: bool,
    pub strict_mode: bool,
    pub argument_resolution: ArgResolution,
    /// Problems found while loading, reported once the sequencer exists.
    pub(crate) issues: Vec<Violation>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("sequence", &self.sequence)
            .field(
                "operations",
                &self.operations.iter().map(|(s, _)| s).collect::<Vec<_>>(),
            )
            .field("values", &self.values)
            .field("labels", &self.labels)
            .field("max_sequence_length", &self.max_sequence_length)
            .field("ignore_warnings", &self.ignore_warnings)
            .field("strict_mode", &self.strict_mode)
            .field("argument_resolution", &self.argument_resolution)
            .field("issues", &self.issues)
            .finish()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequence(mut self, sequence: impl Into<Sequence>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    pub fn operation<F>(mut self, symbol: impl Into<Symbol>, f: F) -> Self
    where
        F: FnMut(&[Option<Value>]) + 'static,
    {
        self.operations.push((symbol.into(), callback(f)));
        self
    }

    pub fn value(mut self, symbol: impl Into<Symbol>, value: impl Into<Value>) -> Self {
        self.values.push((symbol.into(), value.into()));
        self
    }

    pub fn label(mut self, label: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        self.labels.push((label.into(), symbol.into()));
        self
    }

    pub fn max_sequence_length(mut self, max: usize) -> Self {
        self.max_sequence_length = Some(max);
        self
    }

    pub fn ignore_warnings(mut self, value: bool) -> Self {
        self.ignore_warnings = value;
        self
    }

    pub fn strict_mode(mut self, value: bool) -> Self {
        self.strict_mode = value;
        self
    }

    pub fn argument_resolution(mut self, resolution: ArgResolution) -> Self {
        self.argument_resolution = resolution;
        self
    }

    pub fn issues(&self) -> &[Violation] {
        &self.issues
    }

    /// Load a config from JSON text.
    ///
    /// `operations` maps a symbol to an operation name; `bind` turns the name
    /// into a callback. A name `bind` does not know is reported as a missing
    /// callback.
    pub fn from_json<B>(text: &str, mut bind: B) -> ConfigResult<Self>
    where
        B: FnMut(&str) -> Option<Callback>,
    {
        let json: Json = serde_json::from_str(text)?;
        let mut config = Self::default();

        let Json::Object(fields) = json else {
            config.issues.push(
                Violation::new(DiagnosticKind::InvalidConfigField)
                    .detail(format!("config must be an object, got {}", json_type(&json))),
            );
            return Ok(config);
        };

        for (key, value) in &fields {
            match key.as_str() {
                "sequence" => match value {
                    Json::String(s) => config.sequence = Some(Sequence::from(s.as_str())),
                    other => config.invalid_field(key, "a string", other),
                },
                "operations" => {
                    let Some(entries) = config.object_field(key, value) else {
                        continue;
                    };
                    for (symbol, name) in entries {
                        let Json::String(name) = name else {
                            config.issues.push(
                                Violation::new(DiagnosticKind::MissingCallback)
                                    .detail(format!("{symbol:?}"))
                                    .hint(format!("expected an operation name, got {}", json_type(name))),
                            );
                            continue;
                        };
                        match bind(name) {
                            Some(cb) => config.operations.push((Symbol::from(symbol.as_str()), cb)),
                            None => config.issues.push(
                                Violation::new(DiagnosticKind::MissingCallback)
                                    .detail(format!("{symbol:?}"))
                                    .hint(format!("no callback named `{name}`")),
                            ),
                        }
                    }
                }
                "values" => {
                    let Some(entries) = config.object_field(key, value) else {
                        continue;
                    };
                    for (symbol, value) in entries {
                        config
                            .values
                            .push((Symbol::from(symbol.as_str()), Value::from_json(value)));
                    }
                }
                "labels" => {
                    let Some(entries) = config.object_field(key, value) else {
                        continue;
                    };
                    for (label, symbol) in entries {
                        config
                            .labels
                            .push((label.clone(), Symbol::from_json(symbol)));
                    }
                }
                "maxSequenceLength" => match value.as_i64() {
                    Some(n) => match validate::max_length_i64(n) {
                        Ok(max) => config.max_sequence_length = Some(max.get()),
                        Err(violation) => config.issues.push(violation),
                    },
                    None => config.invalid_field(key, "a positive integer", value),
                },
                "ignoreWarnings" => match value {
                    Json::Bool(b) => config.ignore_warnings = *b,
                    other => config.invalid_field(key, "a boolean", other),
                },
                "strictMode" => match value {
                    Json::Bool(b) => config.strict_mode = *b,
                    other => config.invalid_field(key, "a boolean", other),
                },
                "argumentResolution" => {
                    match serde_json::from_value::<ArgResolution>(value.clone()) {
                        Ok(resolution) => config.argument_resolution = resolution,
                        Err(_) => {
                            config.invalid_field(key, "\"presence\" or \"truthiness\"", value)
                        }
                    }
                }
                unknown => config
                    .issues
                    .push(Violation::new(DiagnosticKind::UnknownConfigKey).detail(unknown)),
            }
        }

        Ok(config)
    }

    fn invalid_field(&mut self, key: &str, expected: &str, got: &Json) {
        self.issues.push(
            Violation::new(DiagnosticKind::InvalidConfigField).detail(format!(
                "`{key}` must be {expected}, got {}",
                json_type(got)
            )),
        );
    }

    fn object_field<'j>(
        &mut self,
        key: &str,
        value: &'j Json,
    ) -> Option<&'j serde_json::Map<String, Json>> {
        match value {
            Json::Object(map) => Some(map),
            other => {
                self.invalid_field(key, "an object", other);
                None
            }
        }
    }
}

fn json_type(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}
