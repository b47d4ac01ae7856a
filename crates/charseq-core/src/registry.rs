//! Code-keyed registries for operations, values and labels.
//!
//! All three are plain key-value stores with upsert semantics. Iteration
//! order is insertion order (an overwritten key keeps its original slot), so
//! reverse lookups are deterministic within and across runs.

use indexmap::IndexMap;

use crate::{Code, Value};

/// Operation callback. Receives one resolved argument per argument code;
/// `None` marks a code with no usable registered value.
pub type Callback = Box<dyn FnMut(&[Option<Value>])>;

/// Box a closure as a [`Callback`].
pub fn callback<F>(f: F) -> Callback
where
    F: FnMut(&[Option<Value>]) + 'static,
{
    Box::new(f)
}

/// Maps operation codes to callbacks.
#[derive(Default)]
pub struct OperationRegistry {
    callbacks: IndexMap<Code, Callback>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the callback for `code`. Returns the replaced one.
    pub fn insert(&mut self, code: Code, callback: Callback) -> Option<Callback> {
        self.callbacks.insert(code, callback)
    }

    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        self.callbacks.contains_key(&code)
    }

    pub fn get_mut(&mut self, code: Code) -> Option<&mut Callback> {
        self.callbacks.get_mut(&code)
    }

    pub fn remove(&mut self, code: Code) -> Option<Callback> {
        self.callbacks.shift_remove(&code)
    }

    pub fn clear(&mut self) {
        self.callbacks.clear();
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Registered operation codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = Code> + '_ {
        self.callbacks.keys().copied()
    }
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.callbacks.keys()).finish()
    }
}

/// Maps value codes to values.
#[derive(Debug, Clone, Default)]
pub struct ValueRegistry {
    values: IndexMap<Code, Value>,
}

impl ValueRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: Code, value: Value) -> Option<Value> {
        self.values.insert(code, value)
    }

    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        self.values.contains_key(&code)
    }

    #[inline]
    pub fn get(&self, code: Code) -> Option<&Value> {
        self.values.get(&code)
    }

    pub fn remove(&mut self, code: Code) -> Option<Value> {
        self.values.shift_remove(&code)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Code, &Value)> {
        self.values.iter().map(|(code, value)| (*code, value))
    }

    /// First code (in insertion order) whose value equals `value`.
    pub fn code_for(&self, value: &Value) -> Option<Code> {
        self.values
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(code, _)| *code)
    }
}

/// Maps human-readable labels to codes.
///
/// Labels are not tied to the lifetime of what they name: a label may point
/// at a code that no registry holds.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    labels: IndexMap<String, Code>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, code: Code) -> Option<Code> {
        self.labels.insert(label.into(), code)
    }

    #[inline]
    pub fn get(&self, label: &str) -> Option<Code> {
        self.labels.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    pub fn remove(&mut self, label: &str) -> Option<Code> {
        self.labels.shift_remove(label)
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Code)> {
        self.labels.iter().map(|(label, code)| (label.as_str(), *code))
    }

    /// First label (in insertion order) pointing at `code`.
    pub fn label_for(&self, code: Code) -> Option<&str> {
        self.labels
            .iter()
            .find(|(_, c)| **c == code)
            .map(|(label, _)| label.as_str())
    }
}

/// What a code means in the shared operation/value namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeClass {
    /// Registered operation. Wins over a value registered under the same code.
    Operation,
    Value,
    Unknown,
}

/// Classifies codes against the operation and value namespaces.
pub trait CodeSpace {
    fn classify(&self, code: Code) -> CodeClass;

    #[inline]
    fn is_operation(&self, code: Code) -> bool {
        self.classify(code) == CodeClass::Operation
    }
}

impl<T: CodeSpace + ?Sized> CodeSpace for &T {
    fn classify(&self, code: Code) -> CodeClass {
        (*self).classify(code)
    }
}

/// Borrowed view over both namespaces.
#[derive(Clone, Copy)]
pub struct Registries<'r> {
    pub operations: &'r OperationRegistry,
    pub values: &'r ValueRegistry,
}

impl<'r> Registries<'r> {
    pub fn new(operations: &'r OperationRegistry, values: &'r ValueRegistry) -> Self {
        Self { operations, values }
    }
}

impl CodeSpace for Registries<'_> {
    fn classify(&self, code: Code) -> CodeClass {
        if self.operations.contains(code) {
            CodeClass::Operation
        } else if self.values.contains(code) {
            CodeClass::Value
        } else {
            CodeClass::Unknown
        }
    }
}
