use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::note;
use crate::context::Context;
use crate::error::Diagnostic;

// Dotted names are matched only to be reported; they are never substituted.
static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_.]+)\}\}").expect("valid variable regex"));

/// Replaces each bare `{{name}}` with its bound value.
///
/// Unbound names are left exactly as written so they stay visible in the output.
pub fn substitute_variables(template: &str, context: &Context) -> String {
    substitute_with(template, context, &mut Vec::new())
}

/// Like [`substitute_variables`], recording every token it leaves in place.
/// Substituted values are not scanned again.
pub(crate) fn substitute_with(
    template: &str,
    context: &Context,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    VARIABLE
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match context.get(name).filter(|_| !name.contains('.')) {
                Some(value) => value.to_string(),
                None => {
                    note(diagnostics, Diagnostic::UnboundVariable { name: name.to_string() });
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
