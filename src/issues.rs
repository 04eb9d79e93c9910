//! Issue types for API compliance results.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it: the rule that produced it, the offending item and a message.

use enum_dispatch::enum_dispatch;

use crate::core::model::{Item, ItemKind};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Todo,
    IntDef,
    Nullable,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Todo => write!(f, "todo"),
            Rule::IntDef => write!(f, "int-def"),
            Rule::Nullable => write!(f, "nullable"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Item Location
// ============================================================

/// The item an issue is reported against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLocation {
    pub kind: ItemKind,
    /// Qualified description, e.g. `android.app.Foo#bar(int)`.
    pub item: String,
    /// Source file of the enclosing class, when the model knows it.
    pub file_path: Option<String>,
    pub line: Option<usize>,
}

impl ItemLocation {
    pub fn of(item: &Item<'_>) -> Self {
        Self {
            kind: item.kind(),
            item: item.describe(),
            file_path: item.containing_class().file.clone(),
            line: item.line(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Documentation mentions a TODO marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoIssue {
    pub location: ItemLocation,
}

impl TodoIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Todo
    }
}

/// `int` documentation lists constants but no `@IntDef` is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntDefIssue {
    pub location: ItemLocation,
    /// What is documented, e.g. `Return value of 'getMode'`.
    pub label: String,
}

impl IntDefIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::IntDef
    }
}

/// Documentation mentions `null` but no nullness annotation is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullableIssue {
    pub location: ItemLocation,
    pub label: String,
}

impl NullableIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Nullable
    }
}

/// Model file could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during a check run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Todo(TodoIssue),
    IntDef(IntDefIssue),
    Nullable(NullableIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Todo(_) => TodoIssue::severity(),
            Issue::IntDef(_) => IntDefIssue::severity(),
            Issue::Nullable(_) => NullableIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Todo(_) => TodoIssue::rule(),
            Issue::IntDef(_) => IntDefIssue::rule(),
            Issue::Nullable(_) => NullableIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// An API item.
    Item(&'a ItemLocation),
    /// File-level only (for ParseError).
    File { path: &'a str },
}

/// Trait for types that can be reported to the CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for TodoIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Item(&self.location)
    }

    fn message(&self) -> String {
        "Documentation mentions 'TODO'".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} {}", self.location.kind, self.location.item))
    }
}

impl Report for IntDefIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Item(&self.location)
    }

    fn message(&self) -> String {
        format!(
            "{} documentation mentions constants without declaring an @IntDef",
            self.label
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} {}", self.location.kind, self.location.item))
    }
}

impl Report for NullableIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Item(&self.location)
    }

    fn message(&self) -> String {
        format!(
            "{} documentation mentions 'null' without declaring @NonNull or @Nullable",
            self.label
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} {}", self.location.kind, self.location.item))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use crate::core::model::ClassItem;
    use crate::issues::*;

    fn location() -> ItemLocation {
        let class = ClassItem {
            qualified_name: "android.app.Foo".to_string(),
            file: Some("android/app/Foo.java".to_string()),
            line: Some(12),
            ..Default::default()
        };
        ItemLocation::of(&Item::Class(&class))
    }

    #[test]
    fn test_item_location() {
        let loc = location();
        assert_eq!(loc.kind, ItemKind::Class);
        assert_eq!(loc.item, "android.app.Foo");
        assert_eq!(loc.file_path.as_deref(), Some("android/app/Foo.java"));
        assert_eq!(loc.line, Some(12));
    }

    #[test]
    fn test_todo_issue() {
        let issue = Issue::Todo(TodoIssue {
            location: location(),
        });
        assert_eq!(issue.severity(), Severity::Warning);
        assert_eq!(issue.rule(), Rule::Todo);
        assert_eq!(issue.message(), "Documentation mentions 'TODO'");
        assert_eq!(issue.details().as_deref(), Some("class android.app.Foo"));
    }

    #[test]
    fn test_int_def_message() {
        let issue = Issue::IntDef(IntDefIssue {
            location: location(),
            label: "Return value of 'getMode'".to_string(),
        });
        assert_eq!(
            issue.message(),
            "Return value of 'getMode' documentation mentions constants without declaring an @IntDef"
        );
        assert_eq!(issue.rule(), Rule::IntDef);
    }

    #[test]
    fn test_nullable_message() {
        let issue = Issue::Nullable(NullableIssue {
            location: location(),
            label: "Field 'mName'".to_string(),
        });
        assert_eq!(
            issue.message(),
            "Field 'mName' documentation mentions 'null' without declaring @NonNull or @Nullable"
        );
        assert_eq!(issue.report_severity(), Severity::Warning);
    }

    #[test]
    fn test_parse_error_issue() {
        let issue = Issue::ParseError(ParseErrorIssue {
            file_path: "./api/broken.json".to_string(),
            error: "expected value at line 1 column 1".to_string(),
        });

        assert_eq!(issue.severity(), Severity::Error);
        assert_eq!(issue.rule(), Rule::ParseError);
        assert!(matches!(
            issue.location(),
            ReportLocation::File {
                path: "./api/broken.json"
            }
        ));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::Todo.to_string(), "todo");
        assert_eq!(Rule::IntDef.to_string(), "int-def");
        assert_eq!(Rule::Nullable.to_string(), "nullable");
        assert_eq!(Rule::ParseError.to_string(), "parse-error");
    }
}
