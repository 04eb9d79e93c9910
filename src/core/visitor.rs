//! Deterministic traversal over a [`Codebase`].
//!
//! Classes are visited in qualified-name order. Within a class, methods are
//! visited in source order (declaration order breaks ties and places methods
//! without a known line last), each followed by its parameters, then fields
//! in name order. A skipped class hides all of its members.

use std::cmp::Ordering;

use super::model::{ClassItem, Codebase, FieldItem, Item, ItemId, MethodItem, ParameterItem};

/// Callbacks invoked by [`Codebase::accept`].
///
/// For every visited item `visit_item` runs first, then the kind-specific
/// callback. Member callbacks receive the member's [`ItemId`], which follows
/// declaration order and not visit order.
pub trait ApiVisitor {
    /// Return true to leave `item` (and, for classes, all members) unvisited.
    fn skip(&self, item: &Item<'_>) -> bool {
        item.is_hidden()
    }

    fn visit_item(&mut self, _item: Item<'_>) {}

    fn visit_class(&mut self, _class: &ClassItem) {}

    fn visit_method(&mut self, _id: ItemId, _class: &ClassItem, _method: &MethodItem) {}

    fn visit_field(&mut self, _id: ItemId, _class: &ClassItem, _field: &FieldItem) {}

    fn visit_parameter(
        &mut self,
        _id: ItemId,
        _class: &ClassItem,
        _method: &MethodItem,
        _parameter: &ParameterItem,
    ) {
    }
}

/// Source order: known lines first, ascending. `sort_by` is stable, so equal
/// or unknown lines keep declaration order.
pub fn method_source_order(a: &MethodItem, b: &MethodItem) -> Ordering {
    match (a.line, b.line) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn field_order(a: &FieldItem, b: &FieldItem) -> Ordering {
    a.name.cmp(&b.name)
}

impl Codebase {
    /// Walk every class, method, parameter and field.
    pub fn accept<V: ApiVisitor>(&self, visitor: &mut V) {
        let mut classes: Vec<(usize, &ClassItem)> = self.classes().iter().enumerate().collect();
        classes.sort_by(|(_, a), (_, b)| a.qualified_name.cmp(&b.qualified_name));

        for (c, class) in classes {
            let class_item = Item::Class(class);
            if visitor.skip(&class_item) {
                continue;
            }
            visitor.visit_item(class_item);
            visitor.visit_class(class);

            let mut methods: Vec<(usize, &MethodItem)> = class.methods.iter().enumerate().collect();
            methods.sort_by(|(_, a), (_, b)| method_source_order(a, b));
            for (m, method) in methods {
                visit_method(visitor, (c, m), class, method);
            }

            let mut fields: Vec<(usize, &FieldItem)> = class.fields.iter().enumerate().collect();
            fields.sort_by(|(_, a), (_, b)| field_order(a, b));
            for (f, field) in fields {
                let item = Item::Field { class, field };
                if visitor.skip(&item) {
                    continue;
                }
                visitor.visit_item(item);
                visitor.visit_field(ItemId::Field(c, f), class, field);
            }
        }
    }
}

fn visit_method<V: ApiVisitor>(
    visitor: &mut V,
    (c, m): (usize, usize),
    class: &ClassItem,
    method: &MethodItem,
) {
    let item = Item::Method { class, method };
    if visitor.skip(&item) {
        return;
    }
    visitor.visit_item(item);
    visitor.visit_method(ItemId::Method(c, m), class, method);

    for (p, parameter) in method.parameters.iter().enumerate() {
        let item = Item::Parameter {
            class,
            method,
            parameter,
        };
        if visitor.skip(&item) {
            continue;
        }
        visitor.visit_item(item);
        visitor.visit_parameter(ItemId::Parameter(c, m, p), class, method, parameter);
    }
}
