//! apicheck - documentation and permission checks for Android API surfaces
//!
//! apicheck reads a serialized model of an API surface (classes, methods,
//! fields and parameters with their documentation and annotations) and
//! reports documentation that promises more than the annotations declare:
//! constant sets without `@IntDef`, `null` without a nullness annotation, and
//! stray TODO markers. Along the way it collects the permissions required by
//! methods and intent actions into a JSON report.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Model, traversal, documentation extraction and type qualification
//! - `issues`: Issue type definitions and reporting
//! - `rules`: The compliance rules and the checker running them

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
