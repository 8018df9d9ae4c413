//! pagesmith is a small text template engine.
//! It renders `{{name}}` variables, `{{#if}}`/`{{else}}` conditionals and
//! `{{#each}}` loops against a context, and can spread a collection over
//! numbered pages with navigation.

/// Command-line interface module for the pagesmith binary
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (pagesmith.json, pagesmith.yml, pagesmith.yaml)
pub mod config;

/// Name to value bindings for a render
pub mod context;

/// Loop expansion, conditional resolution and variable substitution
pub mod engine;

/// Error types and handling
pub mod error;

/// Template and context file loading
pub mod loader;

/// Page splitting and navigation
pub mod pagination;

/// Paginated rendering orchestration
pub mod processor;

/// Dynamic values
pub mod value;

pub use context::Context;
pub use engine::{Engine, RenderOptions, Rendered, TemplateRenderer};
pub use error::{Diagnostic, Error, Result};
pub use value::Value;
