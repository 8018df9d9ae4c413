//! The rendering engine.
//!
//! A render runs three passes over the template in a fixed order:
//! loop expansion, conditional resolution, then variable substitution.
//! Each pass builds a new string; the template itself is never modified.

mod conditionals;
mod loops;
pub mod scanner;
mod variables;

use log::debug;

use crate::context::Context;
use crate::error::{Diagnostic, Error, Result};

pub use conditionals::resolve_conditionals;
pub use loops::expand_loops;
pub use variables::substitute_variables;

/// Upper bound on conditional blocks resolved in one run.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Bindings for the render
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &Context) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Turn leftover tokens into `Error::UnresolvedTokens`.
    pub strict: bool,
    pub max_iterations: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { strict: false, max_iterations: DEFAULT_MAX_ITERATIONS }
    }
}

/// Result of a best-effort render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// The loop, conditional and variable engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: RenderOptions,
}

impl Engine {
    /// Creates an engine with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `template` and reports whatever it could not resolve. Never fails.
    pub fn render_report(&self, template: &str, context: &Context) -> Rendered {
        let max_iterations = self.options.max_iterations;

        let expanded = loops::expand_with(template, context, max_iterations);
        let resolved =
            conditionals::resolve_with(&expanded.output, max_iterations, |name| context.get(name));
        let mut diagnostics = resolved.leftover;
        let output = variables::substitute_with(&resolved.output, context, &mut diagnostics);

        if expanded.exhausted || resolved.exhausted {
            diagnostics.push(Diagnostic::IterationLimit { limit: max_iterations });
        }
        debug!("Rendered {} bytes with {} diagnostics", output.len(), diagnostics.len());

        Rendered { output, diagnostics }
    }
}

impl TemplateRenderer for Engine {
    /// Renders a template, failing in strict mode when anything is left unresolved.
    ///
    /// # Errors
    /// * `Error::UnresolvedTokens` in strict mode if any diagnostic was collected
    fn render(&self, template: &str, context: &Context) -> Result<String> {
        let rendered = self.render_report(template, context);
        if self.options.strict && !rendered.diagnostics.is_empty() {
            return Err(Error::UnresolvedTokens(rendered.diagnostics));
        }
        Ok(rendered.output)
    }
}

/// Records a diagnostic once.
pub(crate) fn note(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    if !diagnostics.contains(&diagnostic) {
        diagnostics.push(diagnostic);
    }
}
