//! Read-only model of an API surface.
//!
//! A model file describes the classes of one or more compilation units, their
//! methods, fields and parameters, together with documentation blocks and
//! annotations. The model is produced by an external extractor; this crate only
//! reads it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Simple names of annotations that declare nullness.
pub const NULLNESS_ANNOTATIONS: &[&str] = &[
    "NonNull",
    "Nullable",
    "NotNull",
    "RecentlyNonNull",
    "RecentlyNullable",
];

// ============================================================
// Annotations
// ============================================================

/// A named annotation attribute with its literal leaf values.
///
/// Values are kept as source text, e.g. `Manifest.permission.CAMERA` or
/// `"android.permission.CAMERA"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnnotationAttribute {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl AnnotationAttribute {
    pub fn leaf_values(&self) -> &[String] {
        &self.values
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Annotation {
    /// Qualified name of the annotation type.
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AnnotationAttribute>,
}

impl Annotation {
    /// Last segment of the annotation name.
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }
}

/// Last dot-separated segment of a qualified name.
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

fn declares_nullness(flag: bool, annotations: &[Annotation]) -> bool {
    flag || annotations
        .iter()
        .any(|a| NULLNESS_ANNOTATIONS.contains(&a.simple_name()))
}

// ============================================================
// Items
// ============================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterItem {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub nullness: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodItem {
    pub name: String,
    /// Source line, used for source-order traversal.
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub constructor: bool,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub nullness: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterItem>,
}

impl MethodItem {
    /// `name(type1,type2)` using the types as written in the model.
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self
            .parameters
            .iter()
            .map(|p| p.type_name.as_deref().unwrap_or("?"))
            .collect();
        format!("{}({})", self.name, params.join(","))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldItem {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    /// Initializer value, when it is known.
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub nullness: bool,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassItem {
    pub qualified_name: String,
    #[serde(default)]
    pub package: String,
    /// Source file path of the compilation unit.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub line: Option<usize>,
    /// Qualified import names, in source order. `None` when the compilation
    /// unit has no lexical import list.
    #[serde(default)]
    pub imports: Option<Vec<String>>,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub methods: Vec<MethodItem>,
    #[serde(default)]
    pub fields: Vec<FieldItem>,
}

impl ClassItem {
    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }
}

/// One deserialized model file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelFile {
    #[serde(default)]
    pub classes: Vec<ClassItem>,
}

// ============================================================
// Item view
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemKind {
    Class,
    Method,
    Field,
    Parameter,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Class => write!(f, "class"),
            ItemKind::Method => write!(f, "method"),
            ItemKind::Field => write!(f, "field"),
            ItemKind::Parameter => write!(f, "parameter"),
        }
    }
}

/// Position of an item inside its [`Codebase`]: the class index in
/// declaration order, then the member index within the class, then the
/// parameter index within the method.
///
/// Two items never share a position, even when their descriptions collide
/// (untyped overloads, or a class declared in two model files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemId {
    Class(usize),
    Method(usize, usize),
    Field(usize, usize),
    Parameter(usize, usize, usize),
}

/// A visited item together with its enclosing declarations.
#[derive(Debug, Clone, Copy)]
pub enum Item<'a> {
    Class(&'a ClassItem),
    Method {
        class: &'a ClassItem,
        method: &'a MethodItem,
    },
    Field {
        class: &'a ClassItem,
        field: &'a FieldItem,
    },
    Parameter {
        class: &'a ClassItem,
        method: &'a MethodItem,
        parameter: &'a ParameterItem,
    },
}

impl<'a> Item<'a> {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Class(_) => ItemKind::Class,
            Item::Method { .. } => ItemKind::Method,
            Item::Field { .. } => ItemKind::Field,
            Item::Parameter { .. } => ItemKind::Parameter,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Item::Class(class) => class.simple_name(),
            Item::Method { method, .. } => &method.name,
            Item::Field { field, .. } => &field.name,
            Item::Parameter { parameter, .. } => &parameter.name,
        }
    }

    pub fn containing_class(&self) -> &'a ClassItem {
        match self {
            Item::Class(class) => class,
            Item::Method { class, .. }
            | Item::Field { class, .. }
            | Item::Parameter { class, .. } => class,
        }
    }

    /// The item's own documentation block.
    pub fn documentation(&self) -> &'a str {
        match self {
            Item::Class(class) => &class.documentation,
            Item::Method { method, .. } => &method.documentation,
            Item::Field { field, .. } => &field.documentation,
            Item::Parameter { parameter, .. } => &parameter.documentation,
        }
    }

    pub fn annotations(&self) -> &'a [Annotation] {
        match self {
            Item::Class(class) => &class.annotations,
            Item::Method { method, .. } => &method.annotations,
            Item::Field { field, .. } => &field.annotations,
            Item::Parameter { parameter, .. } => &parameter.annotations,
        }
    }

    /// True if the item declares `@NonNull`/`@Nullable` or equivalent.
    pub fn has_nullness_info(&self) -> bool {
        match self {
            Item::Class(_) => false,
            Item::Method { method, .. } => declares_nullness(method.nullness, &method.annotations),
            Item::Field { field, .. } => declares_nullness(field.nullness, &field.annotations),
            Item::Parameter { parameter, .. } => {
                declares_nullness(parameter.nullness, &parameter.annotations)
            }
        }
    }

    pub fn is_hidden(&self) -> bool {
        match self {
            Item::Class(class) => class.hidden,
            Item::Method { method, .. } => method.hidden,
            Item::Field { field, .. } => field.hidden,
            Item::Parameter { method, .. } => method.hidden,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Item::Class(class) => class.line,
            Item::Method { method, .. } | Item::Parameter { method, .. } => method.line,
            Item::Field { field, .. } => field.line,
        }
    }

    /// Human readable description, e.g. `android.app.Foo#bar(int)`.
    pub fn describe(&self) -> String {
        match self {
            Item::Class(class) => class.qualified_name.clone(),
            Item::Method { class, method } => {
                format!("{}#{}", class.qualified_name, method.signature())
            }
            Item::Field { class, field } => format!("{}#{}", class.qualified_name, field.name),
            Item::Parameter {
                class,
                method,
                parameter,
            } => format!(
                "{}#{}/{}",
                class.qualified_name,
                method.signature(),
                parameter.name
            ),
        }
    }
}

// ============================================================
// Codebase
// ============================================================

/// Capability queries the rule engine needs from the source model.
pub trait SourceModel {
    /// Annotations declared on the class an annotation resolves to, if that
    /// class is part of the model.
    fn resolve_annotation(&self, annotation: &Annotation) -> Option<&[Annotation]>;
}

/// All classes of the checked API surface, indexed by qualified name.
#[derive(Debug, Default)]
pub struct Codebase {
    classes: Vec<ClassItem>,
    index: HashMap<String, usize>,
}

impl Codebase {
    /// Build a codebase. When a qualified name occurs twice the first
    /// declaration wins the index.
    pub fn new(classes: Vec<ClassItem>) -> Self {
        let mut index = HashMap::with_capacity(classes.len());
        for (i, class) in classes.iter().enumerate() {
            index.entry(class.qualified_name.clone()).or_insert(i);
        }
        Self { classes, index }
    }

    pub fn classes(&self) -> &[ClassItem] {
        &self.classes
    }

    pub fn find_class(&self, qualified_name: &str) -> Option<&ClassItem> {
        self.index.get(qualified_name).map(|&i| &self.classes[i])
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl SourceModel for Codebase {
    fn resolve_annotation(&self, annotation: &Annotation) -> Option<&[Annotation]> {
        self.find_class(&annotation.name)
            .map(|class| class.annotations.as_slice())
    }
}
