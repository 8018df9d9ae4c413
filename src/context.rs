//! Name to value bindings for a single render.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::value::Value;

/// Bindings available to one render call.
///
/// A context is built, filled with [`Context::set`], then lent to the engine.
/// The engine never mutates it, so each render owns its own instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    vars: IndexMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from a JSON document.
    ///
    /// # Errors
    /// * `Error::ContextError` if the document is neither an object nor null
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(fields) => Ok(Self {
                vars: fields.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            serde_json::Value::Null => Ok(Self::new()),
            other => Err(Error::ContextError(format!(
                "expected an object at the top level, found {}",
                other
            ))),
        }
    }

    /// Binds `name`, replacing any previous binding.
    pub fn set<S: Into<String>, V: Into<Value>>(&mut self, name: S, value: V) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.vars.shift_remove(name)
    }

    /// Drops every binding.
    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// Copies all bindings of `other` into this context; `other` wins on conflicts.
    pub fn extend(&mut self, other: Context) {
        self.vars.extend(other.vars);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
