//! Constant-set and nullness documentation rules.
//!
//! An `int` whose documentation lists constants such as `MODE_FAST` or
//! `FLAG_*` should be typed with an `@IntDef` annotation; documentation that
//! talks about `null` should be backed by `@NonNull` or `@Nullable`.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    core::model::{Item, SourceModel},
    issues::{IntDefIssue, Issue, ItemLocation, NullableIssue},
};

/// Qualified names of the IntDef marker, legacy support library first.
pub const INT_DEF_ANNOTATIONS: &[&str] = &[
    "android.support.annotation.IntDef",
    "androidx.annotation.IntDef",
];

static CONSTANT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{3,}_([A-Z]{3,}|\*)").unwrap());

static NULL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bnull\b").unwrap());

/// True if `doc` mentions something that looks like an enumerated constant.
pub fn mentions_constants(doc: &str) -> bool {
    CONSTANT_PATTERN.is_match(doc)
}

/// True if `doc` mentions `null` as a word.
pub fn mentions_null(doc: &str) -> bool {
    NULL_PATTERN.is_match(doc)
}

/// True if one of the item's annotations is itself annotated with an IntDef
/// marker.
pub fn has_int_def(item: &Item<'_>, model: &dyn SourceModel) -> bool {
    item.annotations().iter().any(|annotation| {
        model.resolve_annotation(annotation).is_some_and(|declared| {
            declared
                .iter()
                .any(|a| INT_DEF_ANNOTATIONS.contains(&a.name.as_str()))
        })
    })
}

/// What to check for a typed, documented item.
#[derive(Clone, Copy)]
pub struct VariableCheck<'a> {
    pub check_int_def: bool,
    pub check_nullable: bool,
    pub model: &'a dyn SourceModel,
}

impl VariableCheck<'_> {
    /// Check `documentation` (already narrowed to the relevant tag) of `item`.
    ///
    /// `label` names the documented thing in messages, `type_name` is the
    /// rendered declared type. Items without a type are not checked.
    pub fn check(
        &self,
        item: &Item<'_>,
        label: &str,
        type_name: Option<&str>,
        documentation: &str,
    ) -> Vec<Issue> {
        let mut issues = Vec::new();
        let Some(type_name) = type_name else {
            return issues;
        };

        if self.check_int_def
            && type_name == "int"
            && mentions_constants(documentation)
            && !has_int_def(item, self.model)
        {
            issues.push(Issue::IntDef(IntDefIssue {
                location: ItemLocation::of(item),
                label: label.to_string(),
            }));
        }

        if self.check_nullable && mentions_null(documentation) && !item.has_nullness_info() {
            issues.push(Issue::Nullable(NullableIssue {
                location: ItemLocation::of(item),
                label: label.to_string(),
            }));
        }

        issues
    }
}
