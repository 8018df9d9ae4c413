//! Loading templates and contexts from disk.
//! The engine itself never touches the file system; this module feeds it.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::value::Value;
use log::debug;
use std::path::Path;

/// Reads a UTF-8 template file.
///
/// # Errors
/// * `Error::TemplateDoesNotExistError` if the path does not exist
/// * `Error::IoError` if reading fails
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::TemplateDoesNotExistError { template: path.display().to_string() });
    }
    debug!("Loading template from {}", path.display());
    std::fs::read_to_string(path).map_err(Error::IoError)
}

/// Parses a JSON or YAML document. JSON is tried first.
pub fn parse_document(content: &str) -> Result<serde_json::Value> {
    match serde_json::from_str(content) {
        Ok(value) => Ok(value),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ContextError(format!("invalid JSON or YAML document: {}", e))),
    }
}

/// Reads a context file in JSON or YAML format.
///
/// # Errors
/// * `Error::IoError` if reading fails
/// * `Error::ContextError` if the document is invalid or not an object
pub fn load_context<P: AsRef<Path>>(path: P) -> Result<Context> {
    let path = path.as_ref();
    debug!("Loading context from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    Context::from_json(parse_document(&content)?)
}

/// Parses a `key=value` assignment.
/// The value is read as JSON when it parses, otherwise it is kept as a string.
///
/// # Errors
/// * `Error::ContextError` if there is no `=` or the key is empty
pub fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
    let (key, raw) = assignment.split_once('=').ok_or_else(|| {
        Error::ContextError(format!("expected KEY=VALUE, got '{}'", assignment))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::ContextError(format!("empty key in '{}'", assignment)));
    }

    let value = serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::Str(raw.to_string()));
    Ok((key.to_string(), value))
}
