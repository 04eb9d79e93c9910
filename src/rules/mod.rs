//! Compliance rules.
//!
//! The rule functions are pure: each takes the item it inspects and returns
//! the issues or records it produces. [`checker::ComplianceChecker`] wires
//! them into a codebase traversal.
//!
//! ## Module Structure
//!
//! - `todo`: stray TODO markers
//! - `documentation`: undeclared constant sets (`@IntDef`) and nullness
//! - `permission`: permission metadata for the report
//! - `checker`: the visitor running all enabled rules

pub mod checker;
pub mod documentation;
pub mod permission;
pub mod todo;

pub use checker::{ComplianceChecker, EnabledChecks};
