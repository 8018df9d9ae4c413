//! `{{#each}}` expansion with per-item scope.

use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

use super::conditionals::{resolve_with, Resolution};
use super::scanner::{match_each_block, next_tag, Tag};
use super::DEFAULT_MAX_ITERATIONS;
use crate::context::Context;
use crate::value::Value;

static ITEM_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(?:(@index)|this(?:\.([A-Za-z0-9_]+))?)\}\}").expect("valid item token regex")
});

/// Expands every `{{#each name}}body{{/each}}` region.
///
/// Each item gets its own copy of `body` with `{{this}}`, `{{@index}}` and
/// `{{this.field}}` substituted, after which conditionals inside the copy are resolved
/// against the item. A missing or non-list collection expands to nothing; a region
/// without `{{/each}}` is left untouched.
///
/// Inside the copy, `{{#if this.field}}` only consults the item and `{{#if this}}` tests
/// the item itself. A bare `{{#if name}}` consults the item's fields first and then falls
/// back to the top-level context, so a field absent from the item takes the else branch
/// only when the context does not bind that name either.
pub fn expand_loops(template: &str, context: &Context) -> String {
    expand_with(template, context, DEFAULT_MAX_ITERATIONS).output
}

pub(crate) fn expand_with(template: &str, context: &Context, max_iterations: usize) -> Resolution {
    let mut output = String::with_capacity(template.len());
    let mut exhausted = false;
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(span) = next_tag(template, cursor) {
        cursor = span.end;
        let Tag::Each(name) = span.tag else {
            continue;
        };
        let Some(block) = match_each_block(template, span) else {
            debug!("Leaving unterminated {{{{#each {}}}}} at {}", name, span.start);
            continue;
        };

        output.push_str(&template[copied..block.start]);
        let body = &template[block.if_body.clone()];

        match context.get(name).and_then(Value::as_list) {
            Some(items) => {
                debug!("Expanding {{{{#each {}}}}} over {} items", name, items.len());
                for (index, item) in items.iter().enumerate() {
                    let copy = substitute_item(body, item, index);
                    let resolution =
                        resolve_with(&copy, max_iterations, |n| item_lookup(item, context, n));
                    exhausted |= resolution.exhausted;
                    output.push_str(&resolution.output);
                }
            }
            None => debug!("Collection '{}' is missing or not a list", name),
        }

        copied = block.end;
        cursor = block.end;
    }

    output.push_str(&template[copied..]);
    Resolution { output, exhausted, leftover: Vec::new() }
}

fn substitute_item(body: &str, item: &Value, index: usize) -> String {
    ITEM_TOKEN
        .replace_all(body, |caps: &Captures| {
            if caps.get(1).is_some() {
                return index.to_string();
            }
            match caps.get(2) {
                None => item.to_string(),
                Some(field) => match item.as_map().and_then(|fields| fields.get(field.as_str())) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                },
            }
        })
        .into_owned()
}

/// Item scope for conditionals: `this` is the item, `this.field` a field of it,
/// and a bare name is a field first, then a top-level binding.
fn item_lookup<'v>(item: &'v Value, context: &'v Context, name: &str) -> Option<&'v Value> {
    if name == "this" {
        return Some(item);
    }
    let fields = item.as_map();
    match name.strip_prefix("this.") {
        Some(field) => fields.and_then(|f| f.get(field)),
        None => fields.and_then(|f| f.get(name)).or_else(|| context.get(name)),
    }
}
