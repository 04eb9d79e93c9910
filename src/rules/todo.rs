//! TODO marker detection rule.
//!
//! Published documentation should not carry work-in-progress markers.

use crate::{
    core::model::Item,
    issues::{ItemLocation, TodoIssue},
};

const TODO_MARKERS: &[&str] = &["TODO:", "TODO("];

/// Check an item's own documentation for `TODO:` or `TODO(` markers.
pub fn check_todo(item: &Item<'_>) -> Option<TodoIssue> {
    let doc = item.documentation();
    TODO_MARKERS
        .iter()
        .any(|marker| doc.contains(marker))
        .then(|| TodoIssue {
            location: ItemLocation::of(item),
        })
}
