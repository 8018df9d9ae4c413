//! Conditional resolution, innermost block first.

use log::{debug, warn};

use super::scanner::{first_leaf, tags, Tag};
use super::{note, DEFAULT_MAX_ITERATIONS};
use crate::context::Context;
use crate::error::Diagnostic;
use crate::value::Value;

/// Output of a resolution run.
#[derive(Debug)]
pub(crate) struct Resolution {
    pub output: String,
    /// Set when the iteration ceiling stopped the run with blocks left to resolve.
    pub exhausted: bool,
    /// Block tags left in `output` once no leaf remains. Empty when `exhausted`.
    pub leftover: Vec<Diagnostic>,
}

/// Replaces every `{{#if name}}...[{{else}}...]{{/if}}` with its chosen branch,
/// looking names up in the top-level context.
///
/// Unterminated blocks are left in place. Resolution stops silently after
/// [`DEFAULT_MAX_ITERATIONS`] blocks.
pub fn resolve_conditionals(template: &str, context: &Context) -> String {
    resolve_with(template, DEFAULT_MAX_ITERATIONS, |name| context.get(name)).output
}

/// Resolves conditionals against an arbitrary lookup.
///
/// Each iteration replaces the first leaf block and rescans from the beginning.
pub(crate) fn resolve_with<'v, F>(template: &str, max_iterations: usize, lookup: F) -> Resolution
where
    F: Fn(&str) -> Option<&'v Value>,
{
    let mut output = template.to_string();
    let mut iterations = 0;

    while let Some(block) = first_leaf(&output) {
        if iterations == max_iterations {
            warn!("Conditional resolution stopped after {} iterations", max_iterations);
            return Resolution { output, exhausted: true, leftover: Vec::new() };
        }

        let truthy = lookup(block.name).is_some_and(Value::is_truthy);
        debug!("Resolving {{{{#if {}}}}} at {}: {}", block.name, block.start, truthy);

        let branch = if truthy {
            &output[block.if_body.clone()]
        } else {
            block.else_body.clone().map_or("", |range| &output[range])
        };
        let resolved = [&output[..block.start], branch, &output[block.end..]].concat();
        output = resolved;
        iterations += 1;
    }

    let leftover = unmatched_tags(&output);
    Resolution { output, exhausted: false, leftover }
}

/// With no leaf left, every remaining block tag lacks its partner.
fn unmatched_tags(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for span in tags(text).filter(|span| !matches!(span.tag, Tag::Other(_))) {
        let tag = text[span.start..span.end].to_string();
        note(&mut diagnostics, Diagnostic::UnterminatedBlock { tag });
    }
    diagnostics
}
