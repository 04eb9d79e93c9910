//! Permission metadata extraction.
//!
//! Methods (and intent-action fields) annotated with the permission
//! annotation produce one report record per matching attribute.

use crate::core::{
    model::{Annotation, AnnotationAttribute, ClassItem, FieldItem, MethodItem},
    permissions::{FieldPermissionRecord, MethodPermissionRecord},
    type_names::{TypeContext, qualify},
};

/// Attributes of the permission annotation that carry permission names.
pub const PERMISSION_ATTRIBUTES: &[&str] = &["value", "allOf", "anyOf"];

/// Only fields whose name contains this marker are intent actions.
pub const ACTION_MARKER: &str = "ACTION";

/// How permission annotations are recognized and rendered.
#[derive(Debug, Clone)]
pub struct PermissionSettings {
    /// Simple name of the permission annotation, e.g. `RequiresPermission`.
    pub annotation: String,
    /// Prefix prepended to every rendered permission.
    pub prefix: String,
}

impl Default for PermissionSettings {
    fn default() -> Self {
        Self {
            annotation: "RequiresPermission".to_string(),
            prefix: "android.permission.".to_string(),
        }
    }
}

impl PermissionSettings {
    fn find_annotation<'a>(&self, annotations: &'a [Annotation]) -> Option<&'a Annotation> {
        annotations
            .iter()
            .find(|a| a.simple_name() == self.annotation)
    }

    /// Render one literal value as a permission name.
    ///
    /// `Manifest.permission.CAMERA` and `"CAMERA"` both become
    /// `android.permission.CAMERA` with the default prefix.
    pub fn render(&self, literal: &str) -> String {
        let text = literal.trim();
        let text = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or(text);
        let name = text.rsplit('.').next().unwrap_or(text);
        format!("{}{}", self.prefix, name)
    }

    fn render_all(&self, attribute: &AnnotationAttribute) -> Vec<String> {
        attribute
            .leaf_values()
            .iter()
            .map(|value| self.render(value))
            .collect()
    }
}

/// Attributes of the permission annotation that name at least one permission.
fn permission_attributes<'a>(
    annotation: &'a Annotation,
) -> impl Iterator<Item = &'a AnnotationAttribute> {
    annotation.attributes.iter().filter(|attribute| {
        PERMISSION_ATTRIBUTES.contains(&attribute.name.as_str())
            && !attribute.leaf_values().is_empty()
    })
}

/// Permission records of a method, one per matching attribute.
pub fn method_records(
    class: &ClassItem,
    method: &MethodItem,
    settings: &PermissionSettings,
) -> Vec<MethodPermissionRecord> {
    let Some(annotation) = settings.find_annotation(&method.annotations) else {
        return Vec::new();
    };

    let ctx = TypeContext::of_class(class);
    let return_type = if method.constructor {
        class.qualified_name.clone()
    } else {
        qualify(method.return_type.as_deref().unwrap_or("void"), &ctx)
    };
    let params: Vec<String> = method
        .parameters
        .iter()
        .map(|p| {
            p.type_name
                .as_deref()
                .map(|t| qualify(t, &ctx))
                .unwrap_or_default()
        })
        .collect();

    permission_attributes(annotation)
        .map(|attribute| {
            let permissions = settings.render_all(attribute);
            tracing::debug!(
                class = %class.qualified_name,
                method = %method.name,
                attribute = %attribute.name,
                ?permissions,
                "method requires permission"
            );
            MethodPermissionRecord {
                method_name: method.name.clone(),
                attribute: attribute.name.clone(),
                class_name: class.qualified_name.clone(),
                return_type: return_type.clone(),
                params: params.clone(),
                permissions,
            }
        })
        .collect()
}

/// Permission records of an intent-action field.
///
/// Fields whose name does not contain `ACTION` produce nothing.
pub fn field_records(
    class: &ClassItem,
    field: &FieldItem,
    settings: &PermissionSettings,
) -> Vec<FieldPermissionRecord> {
    if !field.name.contains(ACTION_MARKER) {
        return Vec::new();
    }
    let Some(annotation) = settings.find_annotation(&field.annotations) else {
        return Vec::new();
    };

    permission_attributes(annotation)
        .map(|attribute| {
            let permissions = settings.render_all(attribute);
            tracing::debug!(
                class = %class.qualified_name,
                field = %field.name,
                attribute = %attribute.name,
                ?permissions,
                "action requires permission"
            );
            FieldPermissionRecord {
                field_name: field.name.clone(),
                attribute: attribute.name.clone(),
                class_name: class.qualified_name.clone(),
                value: field.value.clone(),
                permissions,
            }
        })
        .collect()
}
