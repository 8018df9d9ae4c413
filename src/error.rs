//! Error handling for pagesmith.
//! Defines the error type and result alias used throughout the crate.

use thiserror::Error;

/// A problem left behind by a best-effort render.
///
/// Collected by [`crate::engine::Engine::render_report`] and surfaced as an error
/// only when strict mode is enabled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A `{{name}}` or `{{this.field}}` token with no binding.
    #[error("unbound variable '{name}'")]
    UnboundVariable { name: String },
    /// A block tag that never found its partner, e.g. `{{#if a}}` without `{{/if}}`.
    #[error("unterminated block '{tag}'")]
    UnterminatedBlock { tag: String },
    /// Conditional resolution stopped at the iteration ceiling.
    #[error("conditional resolution stopped after {limit} iterations")]
    IterationLimit { limit: usize },
}

/// Custom error types for pagesmith operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Template '{template}' does not exist.")]
    TemplateDoesNotExistError { template: String },

    /// Represents errors in building a render context
    #[error("Context error: {0}.")]
    ContextError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Strict mode found tokens the render could not resolve
    #[error(
        "Unresolved tokens: {}.",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    UnresolvedTokens(Vec<Diagnostic>),
}

/// Convenience type alias for Results with pagesmith's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
