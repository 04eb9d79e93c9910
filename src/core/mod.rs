//! Core model and analysis primitives.
//!
//! - `model`: serde model of an API surface and the [`Item`] view over it
//! - `source`: loading model files from disk
//! - `visitor`: deterministic traversal
//! - `docs`: documentation tag extraction and its cache
//! - `type_names`: qualification of short type references
//! - `permissions`: the permission report accumulator
//! - `context`: everything a check run needs, assembled from config and CLI

pub mod context;
pub mod docs;
pub mod model;
pub mod permissions;
pub mod source;
pub mod type_names;
pub mod visitor;

pub use context::{CheckContext, CheckSettings};
pub use model::{Codebase, Item, SourceModel};
pub use permissions::PermissionReport;
pub use visitor::ApiVisitor;
