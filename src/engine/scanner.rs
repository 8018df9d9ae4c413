//! Tag scanning and block matching.
//!
//! Blocks are re-derived from the current string on every pass; a [`Block`] is only
//! a set of byte offsets into the text it was matched against.

use std::ops::Range;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A classified `{{ ... }}` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    If(&'a str),
    Else,
    EndIf,
    Each(&'a str),
    EndEach,
    /// Anything else, e.g. a variable. Carries the text between the braces.
    Other(&'a str),
}

/// A tag together with its `[start, end)` offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub tag: Tag<'a>,
}

/// A matched conditional or loop region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub start: usize,
    pub end: usize,
    /// Condition or collection name.
    pub name: &'a str,
    /// Body of the `if` branch, or the whole loop body.
    pub if_body: Range<usize>,
    pub else_body: Option<Range<usize>>,
}

impl<'a> Block<'a> {
    fn conditional(
        name: &'a str,
        open: TagSpan<'a>,
        divider: Option<TagSpan<'a>>,
        close: TagSpan<'a>,
    ) -> Self {
        let (if_body, else_body) = match divider {
            Some(divider) => (open.end..divider.start, Some(divider.end..close.start)),
            None => (open.end..close.start, None),
        };
        Block { start: open.start, end: close.end, name, if_body, else_body }
    }

    /// Whether neither branch contains a further `{{#if}}`.
    pub fn is_leaf(&self, text: &str) -> bool {
        let else_has_if =
            self.else_body.clone().is_some_and(|range| contains_if(&text[range]));
        !contains_if(&text[self.if_body.clone()]) && !else_has_if
    }
}

/// Whether `s` is a valid variable, condition or collection name.
pub fn is_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
}

fn opening_name<'a>(inner: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = inner.strip_prefix(keyword)?;
    let name = rest.trim_start();
    // at least one whitespace between keyword and name
    if name.len() == rest.len() || !is_name(name) {
        return None;
    }
    Some(name)
}

fn classify(inner: &str) -> Tag<'_> {
    match inner {
        "else" => Tag::Else,
        "/if" => Tag::EndIf,
        "/each" => Tag::EndEach,
        _ => {
            if let Some(name) = opening_name(inner, "#if") {
                Tag::If(name)
            } else if let Some(name) = opening_name(inner, "#each") {
                Tag::Each(name)
            } else {
                Tag::Other(inner)
            }
        }
    }
}

/// Finds the first tag starting at or after `from`.
pub fn next_tag(text: &str, from: usize) -> Option<TagSpan<'_>> {
    let first_open = from + text.get(from..)?.find(OPEN)?;
    let close = first_open + OPEN.len() + text[first_open + OPEN.len()..].find(CLOSE)?;
    // The innermost `{{` before the close wins, so `{{ {{a}}` yields `{{a}}`.
    let start = text[..close].rfind(OPEN).unwrap_or(first_open);
    let inner = &text[start + OPEN.len()..close];
    Some(TagSpan { start, end: close + CLOSE.len(), tag: classify(inner) })
}

/// Iterator over every tag in a string, left to right.
pub struct Tags<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for Tags<'a> {
    type Item = TagSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = next_tag(self.text, self.cursor)?;
        self.cursor = span.end;
        Some(span)
    }
}

pub fn tags(text: &str) -> Tags<'_> {
    Tags { text, cursor: 0 }
}

fn contains_if(text: &str) -> bool {
    tags(text).any(|span| matches!(span.tag, Tag::If(_)))
}

/// Matches the conditional opened by `open` using a depth-aware scan.
///
/// Depth starts at 1; each nested `{{#if}}` increments it and each `{{/if}}` decrements it.
/// An `{{else}}` belongs to this block only when seen at depth 1. Returns `None` when no
/// `{{/if}}` brings the depth back to 0.
pub fn match_if_block<'a>(text: &'a str, open: TagSpan<'a>) -> Option<Block<'a>> {
    let Tag::If(name) = open.tag else {
        return None;
    };

    let mut depth = 1usize;
    let mut divider: Option<TagSpan> = None;
    for span in (Tags { text, cursor: open.end }) {
        match span.tag {
            Tag::If(_) => depth += 1,
            Tag::Else if depth == 1 && divider.is_none() => divider = Some(span),
            Tag::EndIf => {
                depth -= 1;
                if depth == 0 {
                    return Some(Block::conditional(name, open, divider, span));
                }
            }
            _ => {}
        }
    }
    None
}

/// Finds the first leaf conditional in a single forward pass.
///
/// Open `{{#if}}` tags are kept on a stack. The first `{{/if}}` closes the nearest open
/// one and no `{{#if}}` can sit between them, so that pair is the first leaf. Each frame
/// keeps the first `{{else}}` seen while it is on top.
pub fn first_leaf(text: &str) -> Option<Block<'_>> {
    let mut stack: Vec<(&str, TagSpan, Option<TagSpan>)> = Vec::new();
    for span in tags(text) {
        match span.tag {
            Tag::If(name) => stack.push((name, span, None)),
            Tag::Else => {
                if let Some(frame) = stack.last_mut() {
                    if frame.2.is_none() {
                        frame.2 = Some(span);
                    }
                }
            }
            Tag::EndIf => {
                if let Some((name, open, divider)) = stack.pop() {
                    return Some(Block::conditional(name, open, divider, span));
                }
            }
            _ => {}
        }
    }
    None
}

/// Pairs an `{{#each}}` with the first `{{/each}}` after it. Loops do not nest.
pub fn match_each_block<'a>(text: &'a str, open: TagSpan<'a>) -> Option<Block<'a>> {
    let Tag::Each(name) = open.tag else {
        return None;
    };

    (Tags { text, cursor: open.end })
        .find(|span| span.tag == Tag::EndEach)
        .map(|close| Block {
            start: open.start,
            end: close.end,
            name,
            if_body: open.end..close.start,
            else_body: None,
        })
}
