//! Qualification of short type references.
//!
//! Turns rendered type strings such as `Bundle`, `int[]` or `List<String>`
//! into fully qualified names using the import list of the enclosing
//! compilation unit, falling back to the enclosing package. Only one level of
//! generic arguments is handled.

use super::model::{ClassItem, simple_name};

const PRIMITIVE_TYPES: &[&str] = &[
    "boolean", "boolean[]", "byte", "byte[]", "char", "char[]", "short", "short[]", "int",
    "int[]", "long", "long[]", "float", "float[]", "double", "double[]", "void",
];

/// Where a type reference is written: the enclosing package and, when the
/// compilation unit has one, its import list.
#[derive(Debug, Clone, Copy)]
pub struct TypeContext<'a> {
    pub package: &'a str,
    pub imports: Option<&'a [String]>,
}

impl<'a> TypeContext<'a> {
    pub fn new(package: &'a str, imports: Option<&'a [String]>) -> Self {
        Self { package, imports }
    }

    /// Context of the compilation unit declaring `class`.
    pub fn of_class(class: &'a ClassItem) -> Self {
        Self {
            package: &class.package,
            imports: class.imports.as_deref(),
        }
    }
}

/// Qualify a rendered type string.
///
/// # Examples
///
/// ```
/// use apicheck::core::type_names::{TypeContext, qualify};
///
/// let imports = vec!["com.example.Foo".to_string()];
/// let ctx = TypeContext::new("android.app", Some(&imports));
///
/// assert_eq!(qualify("int[]", &ctx), "int[]");
/// assert_eq!(qualify("Foo", &ctx), "com.example.Foo");
/// assert_eq!(qualify("List<String>", &ctx), "android.app.List<java.lang.String>");
/// ```
pub fn qualify(type_name: &str, ctx: &TypeContext<'_>) -> String {
    if let Some(element) = type_name.strip_suffix("[]") {
        return format!("{}[]", qualify(element, ctx));
    }

    if let (Some(open), Some(close)) = (type_name.find('<'), type_name.find('>'))
        && open < close
    {
        let left = &type_name[..open];
        let right = &type_name[open + 1..close];
        return format!("{}<{}>", resolve(left, ctx), resolve(right, ctx));
    }

    resolve(type_name, ctx)
}

/// Resolve a single short name.
///
/// The first import whose last segment equals `name` wins; a second import
/// with the same last segment is never consulted.
pub fn resolve(name: &str, ctx: &TypeContext<'_>) -> String {
    if name.contains('.') {
        return name.to_string();
    }
    match name {
        "String" => return "java.lang.String".to_string(),
        "String[]" => return "java.lang.String[]".to_string(),
        _ => {}
    }
    if PRIMITIVE_TYPES.contains(&name) {
        return name.to_string();
    }

    if let Some(import) = ctx
        .imports
        .unwrap_or_default()
        .iter()
        .find(|import| simple_name(import) == name)
    {
        return import.clone();
    }

    format!("{}.{}", ctx.package, name)
}
