//! Splitting a collection into pages and computing per-page navigation.

use serde::Serialize;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::value::Value;

/// Maximum number of page links in the navigation window.
pub const WINDOW_SIZE: usize = 7;

/// Splits `items` into contiguous pages of `page_size`, keeping order.
///
/// A `page_size` of 0 disables pagination and yields a single page holding every item.
/// Otherwise an empty input yields no pages and the last page may be shorter.
pub fn paginate<T: Clone>(items: &[T], page_size: usize) -> Vec<Vec<T>> {
    if page_size == 0 {
        return vec![items.to_vec()];
    }
    items.chunks(page_size).map(<[T]>::to_vec).collect()
}

/// File name of a page: `<base>.html` for page 1, `<base>_page<k>.html` after it.
pub fn page_file_name(base_name: &str, page: usize) -> String {
    if page <= 1 {
        format!("{}.html", base_name)
    } else {
        format!("{}_page{}.html", base_name, page)
    }
}

/// One entry of the page-number window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    pub number: usize,
    pub file: String,
    pub is_current: bool,
}

/// Navigation bindings for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Empty when there is no previous page.
    pub prev_page_file: String,
    /// Empty when there is no next page.
    pub next_page_file: String,
    pub page_numbers: Vec<PageLink>,
}

impl Navigation {
    /// Binds every navigation field into `context` under its camelCase name.
    ///
    /// # Errors
    /// * `Error::JsonError` if serialization fails
    pub fn apply_to(&self, context: &mut Context) -> Result<()> {
        match Value::from(serde_json::to_value(self)?) {
            Value::Map(fields) => {
                for (name, value) in fields {
                    context.set(name, value);
                }
                Ok(())
            }
            _ => Err(Error::ContextError("navigation did not serialize to a map".to_string())),
        }
    }
}

/// Computes navigation for `current_page` of `total_pages` (both 1-based).
///
/// The window holds at most [`WINDOW_SIZE`] page numbers, centered on the current page
/// when possible and clamped to `[1, total_pages]`.
pub fn build_navigation(current_page: usize, total_pages: usize, base_name: &str) -> Navigation {
    let has_prev = current_page > 1;
    let has_next = current_page < total_pages;

    let width = WINDOW_SIZE.min(total_pages);
    let mut start = current_page.saturating_sub(WINDOW_SIZE / 2).max(1);
    if start + width > total_pages + 1 {
        start = total_pages + 1 - width;
    }
    let start = start.max(1);

    let page_numbers = (start..start + width)
        .map(|number| PageLink {
            number,
            file: page_file_name(base_name, number),
            is_current: number == current_page,
        })
        .collect();

    Navigation {
        current_page,
        total_pages,
        has_prev,
        has_next,
        prev_page_file: if has_prev {
            page_file_name(base_name, current_page - 1)
        } else {
            String::new()
        },
        next_page_file: if has_next {
            page_file_name(base_name, current_page + 1)
        } else {
            String::new()
        },
        page_numbers,
    }
}
