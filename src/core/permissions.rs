//! Permission report accumulated during a check run.
//!
//! Records are appended in visitation order and written once, as a single
//! pretty-printed JSON document, when the run ends.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Default file name of the permission report.
pub const REPORT_FILE_NAME: &str = "metalava.json";

/// Permissions required by a method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodPermissionRecord {
    #[serde(rename = "methodName")]
    pub method_name: String,
    /// Annotation attribute the permissions came from (`value`, `allOf`, `anyOf`).
    pub attribute: String,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(rename = "return")]
    pub return_type: String,
    #[serde(rename = "param")]
    pub params: Vec<String>,
    #[serde(rename = "permission")]
    pub permissions: Vec<String>,
}

/// Permissions required by an intent-action field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldPermissionRecord {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    pub attribute: String,
    #[serde(rename = "class")]
    pub class_name: String,
    /// Field initializer. Omitted when the model does not know it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(rename = "permission")]
    pub permissions: Vec<String>,
}

/// Method and field permission records of one run.
#[derive(Debug, Default, Serialize)]
pub struct PermissionReport {
    method: Vec<MethodPermissionRecord>,
    field: Vec<FieldPermissionRecord>,
}

impl PermissionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run with empty record collections.
    pub fn start(&mut self) {
        self.method.clear();
        self.field.clear();
    }

    pub fn insert_method_record(&mut self, record: MethodPermissionRecord) {
        self.method.push(record);
    }

    pub fn insert_field_record(&mut self, record: FieldPermissionRecord) {
        self.field.push(record);
    }

    pub fn method_records(&self) -> &[MethodPermissionRecord] {
        &self.method
    }

    pub fn field_records(&self) -> &[FieldPermissionRecord] {
        &self.field
    }

    pub fn len(&self) -> usize {
        self.method.len() + self.field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.method.is_empty() && self.field.is_empty()
    }

    /// Pretty-printed JSON document with `method` and `field` arrays.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize permission report")
    }

    /// Finish the run: write the report to `path`, replacing any previous file.
    pub fn end(&self, path: &Path) -> Result<()> {
        let content = self.to_json_string()?;
        fs::write(path, format!("{}\n", content))
            .with_context(|| format!("Failed to write permission report: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            methods = self.method.len(),
            fields = self.field.len(),
            "wrote permission report"
        );
        Ok(())
    }
}
