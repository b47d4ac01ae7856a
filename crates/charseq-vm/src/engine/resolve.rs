//! Argument resolution policy.

use serde::{Deserialize, Serialize};

use charseq_core::{Code, Value, ValueRegistry};

/// How an argument code becomes a callback argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgResolution {
    /// Any registered value is passed, falsy ones and `Null` included.
    #[default]
    Presence,
    /// Only truthy registered values are passed; falsy ones (`Null`, `false`,
    /// `0`, `""`, `NaN`) arrive as `None`, same as unregistered codes.
    Truthiness,
}

impl ArgResolution {
    pub fn resolve(self, values: &ValueRegistry, code: Code) -> Option<Value> {
        let value = values.get(code)?;
        match self {
            ArgResolution::Presence => Some(value.clone()),
            ArgResolution::Truthiness => value.is_truthy().then(|| value.clone()),
        }
    }
}
