//! The compliance checker: runs every enabled rule over the items a
//! [`Codebase`](crate::core::Codebase) traversal hands it.

use crate::{
    core::{
        context::CheckSettings,
        docs::{DocCache, RETURN_TAG},
        model::{ClassItem, FieldItem, Item, ItemId, MethodItem, ParameterItem, SourceModel},
        permissions::PermissionReport,
        visitor::ApiVisitor,
    },
    issues::Issue,
    rules::{
        documentation::VariableCheck,
        permission::{field_records, method_records},
        todo::check_todo,
    },
};

/// Which rules a run evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledChecks {
    pub todo: bool,
    pub int_def: bool,
    pub nullable: bool,
    pub permission: bool,
}

impl EnabledChecks {
    pub fn all() -> Self {
        Self {
            todo: true,
            int_def: true,
            nullable: true,
            permission: true,
        }
    }

    pub fn none() -> Self {
        Self {
            todo: false,
            int_def: false,
            nullable: false,
            permission: false,
        }
    }
}

impl Default for EnabledChecks {
    fn default() -> Self {
        Self::all()
    }
}

/// Visitor applying the rules to each item.
///
/// Issues are collected in traversal order; permission records go straight
/// to the caller's [`PermissionReport`].
pub struct ComplianceChecker<'a> {
    model: &'a dyn SourceModel,
    settings: &'a CheckSettings,
    checks: EnabledChecks,
    docs: DocCache,
    report: &'a mut PermissionReport,
    issues: Vec<Issue>,
    classes_checked: usize,
}

impl<'a> ComplianceChecker<'a> {
    pub fn new(
        model: &'a dyn SourceModel,
        settings: &'a CheckSettings,
        checks: EnabledChecks,
        report: &'a mut PermissionReport,
    ) -> Self {
        Self {
            model,
            settings,
            checks,
            docs: DocCache::new(settings.doc_cache_size),
            report,
            issues: Vec::new(),
            classes_checked: 0,
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn classes_checked(&self) -> usize {
        self.classes_checked
    }

    pub fn doc_cache(&self) -> &DocCache {
        &self.docs
    }

    /// Consume the checker, returning the issues in traversal order.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    fn variable_check(&self) -> VariableCheck<'a> {
        VariableCheck {
            check_int_def: self.checks.int_def,
            check_nullable: self.checks.nullable,
            model: self.model,
        }
    }

    fn wants_documentation(&self) -> bool {
        self.checks.int_def || self.checks.nullable
    }

    fn check_variable(
        &mut self,
        id: ItemId,
        item: Item<'_>,
        tag: Option<&str>,
        label: &str,
        type_name: Option<&str>,
    ) {
        if !self.wants_documentation() || type_name.is_none() {
            return;
        }
        let documentation = self.docs.documentation(id, item, tag);
        let issues = self
            .variable_check()
            .check(&item, label, type_name, &documentation);
        self.issues.extend(issues);
    }
}

impl ApiVisitor for ComplianceChecker<'_> {
    fn skip(&self, item: &Item<'_>) -> bool {
        if item.is_hidden() {
            return true;
        }
        if let Item::Class(class) = item
            && !self.settings.in_scope(&class.qualified_name)
        {
            tracing::debug!(class = %class.qualified_name, "skipping class outside checked namespaces");
            return true;
        }
        false
    }

    fn visit_item(&mut self, item: Item<'_>) {
        if self.checks.todo
            && let Some(issue) = check_todo(&item)
        {
            self.issues.push(Issue::Todo(issue));
        }
    }

    fn visit_class(&mut self, _class: &ClassItem) {
        self.classes_checked += 1;
    }

    fn visit_method(&mut self, id: ItemId, class: &ClassItem, method: &MethodItem) {
        if !method.constructor {
            let label = format!("Return value of '{}'", method.name);
            self.check_variable(
                id,
                Item::Method { class, method },
                Some(RETURN_TAG),
                &label,
                method.return_type.as_deref(),
            );
        }

        if self.checks.permission {
            for record in method_records(class, method, &self.settings.permissions) {
                self.report.insert_method_record(record);
            }
        }
    }

    fn visit_field(&mut self, id: ItemId, class: &ClassItem, field: &FieldItem) {
        let label = format!("Field '{}'", field.name);
        self.check_variable(
            id,
            Item::Field { class, field },
            None,
            &label,
            field.type_name.as_deref(),
        );

        if self.checks.permission {
            for record in field_records(class, field, &self.settings.permissions) {
                self.report.insert_field_record(record);
            }
        }
    }

    fn visit_parameter(
        &mut self,
        id: ItemId,
        class: &ClassItem,
        method: &MethodItem,
        parameter: &ParameterItem,
    ) {
        let label = format!("Parameter '{}' of '{}'", parameter.name, method.name);
        self.check_variable(
            id,
            Item::Parameter {
                class,
                method,
                parameter,
            },
            Some(parameter.name.as_str()),
            &label,
            parameter.type_name.as_deref(),
        );
    }
}
