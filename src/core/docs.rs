//! Documentation tag range extraction.
//!
//! Locates the part of a documentation block that describes a given tag:
//! the whole block, the `@return` section, or the `@param` section of a named
//! parameter. Decoration characters (`*` and whitespace) are ignored when
//! deciding whether a word is labelled by `@param` and whether an `@` starts a
//! new block tag.

use std::collections::VecDeque;

use super::model::{Item, ItemId};

/// Tag selecting the `@return` section.
pub const RETURN_TAG: &str = "@return";

const PARAM_TAG: &str = "@param";

/// Extract the substring of `doc` that belongs to `tag`.
///
/// - `tag == None` returns the whole block.
/// - `tag == Some("@return")` returns the `@return` section.
/// - Any other tag is a parameter name; its `@param` section is returned.
///
/// Returns an empty string when the block is blank or the tag has no section.
pub fn extract(doc: &str, tag: Option<&str>) -> String {
    if doc.trim().is_empty() {
        return String::new();
    }

    let Some(tag) = tag else {
        return doc.to_string();
    };

    let start = if tag == RETURN_TAG {
        doc.find(RETURN_TAG)
    } else {
        find_param_start(doc, tag)
    };

    match start {
        Some(start) => doc[start..find_section_end(doc, start)].to_string(),
        None => String::new(),
    }
}

/// Documentation of `item` for `tag`.
///
/// A parameter is documented by its method's `@param` section, so parameter
/// items always search the containing method's block using their own name.
pub fn find_documentation(item: Item<'_>, tag: Option<&str>) -> String {
    match item {
        Item::Parameter {
            method, parameter, ..
        } => extract(&method.documentation, Some(&parameter.name)),
        _ => extract(item.documentation(), tag),
    }
}

/// Index of the `@` of the `@param` label preceding an occurrence of `name`.
fn find_param_start(doc: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let mut cursor = 0;
    while let Some(offset) = doc[cursor..].find(name) {
        let found = cursor + offset;
        if let Some(label) = param_label_before(doc, found) {
            return Some(label);
        }
        cursor = found + name.len();
    }
    None
}

/// Scan backwards from `pos` over decoration; if the first other character
/// ends an `@param` label, return the label's start.
fn param_label_before(doc: &str, pos: usize) -> Option<usize> {
    let (i, c) = doc[..pos]
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_decoration(c))?;

    if c != 'm' || i < PARAM_TAG.len() - 1 {
        return None;
    }
    let label_start = i + 1 - PARAM_TAG.len();
    let label = doc.get(label_start..=i)?;
    label
        .eq_ignore_ascii_case(PARAM_TAG)
        .then_some(label_start)
}

/// End of the section starting at `start`: the first block tag after it, or
/// the end of the block.
fn find_section_end(doc: &str, start: usize) -> usize {
    // Sections always start at an ASCII '@'.
    let from = start + 1;
    let mut at_line_start = false;

    for (offset, c) in doc[from..].char_indices() {
        let i = from + offset;
        if c == '@'
            && (at_line_start
                || starts_with_ignore_case(&doc[i..], PARAM_TAG)
                || starts_with_ignore_case(&doc[i..], RETURN_TAG))
        {
            return i;
        } else if c == '\n' {
            at_line_start = true;
        } else if !is_decoration(c) {
            at_line_start = false;
        }
    }
    doc.len()
}

fn is_decoration(c: char) -> bool {
    c == '*' || c.is_whitespace()
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

// ============================================================
// Cache
// ============================================================

/// Cache key: item position plus the requested tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocKey {
    pub item: ItemId,
    pub tag: Option<String>,
}

impl DocKey {
    pub fn new(item: ItemId, tag: Option<&str>) -> Self {
        Self {
            item,
            tag: tag.map(str::to_string),
        }
    }
}

/// Small LRU cache in front of [`find_documentation`].
///
/// Return-value and parameter checks of one item ask for the same section back
/// to back, so a capacity of one already absorbs most repeated lookups.
#[derive(Debug)]
pub struct DocCache {
    capacity: usize,
    entries: VecDeque<(DocKey, String)>,
    hits: usize,
    misses: usize,
}

impl DocCache {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Documentation of `item` (found at `id`) for `tag`, computed at most
    /// once while the entry stays cached.
    pub fn documentation(&mut self, id: ItemId, item: Item<'_>, tag: Option<&str>) -> String {
        let key = DocKey::new(id, tag);
        self.get_or_insert_with(key, || find_documentation(item, tag))
    }

    pub fn get_or_insert_with(&mut self, key: DocKey, compute: impl FnOnce() -> String) -> String {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.hits += 1;
            // Move to the most recently used end.
            if let Some(entry) = self.entries.remove(pos) {
                let value = entry.1.clone();
                self.entries.push_back(entry);
                return value;
            }
        }

        self.misses += 1;
        let value = compute();
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((key, value.clone()));
        value
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DocCache {
    fn default() -> Self {
        Self::new(1)
    }
}
