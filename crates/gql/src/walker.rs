//! Type graph traversal.
//!
//! Collects the object and enum types reachable from the root query type, in
//! the order their blocks appear in the generated document.

use std::collections::{HashSet, VecDeque};

use gqlproto_schema::{SchemaGraph, TypeId, TypeNode};

use crate::error::{Result, TranslateError};

/// Compute the emission list for `graph`.
///
/// The root comes first. Other types follow in breadth-first discovery order:
/// the fields of each object are inspected in declaration order, and a type is
/// appended the first time any field references it. Types are marked visited
/// before they are expanded, so cycles terminate. Type names are unique per
/// graph, which `SchemaGraphBuilder` enforces, so each block name is distinct.
pub fn emission_list(graph: &SchemaGraph) -> Result<Vec<TypeId>> {
    let root = graph.root();
    let root_object = graph
        .get(root)
        .ok_or_else(|| TranslateError::InvalidSchemaGraph(format!("root type {root} is missing")))?
        .as_object()
        .ok_or_else(|| {
            TranslateError::InvalidSchemaGraph(format!(
                "root type '{}' is not an object type",
                graph.root_name()
            ))
        })?;
    if root_object.name.is_empty() {
        return Err(TranslateError::InvalidSchemaGraph(
            "root type has no name".to_string(),
        ));
    }

    let mut visited: HashSet<TypeId> = HashSet::from([root]);
    let mut queue: VecDeque<TypeId> = VecDeque::from([root]);
    let mut emitted = vec![root];

    while let Some(id) = queue.pop_front() {
        // Enums carry no outgoing references
        let Some(TypeNode::Object(object)) = graph.get(id) else {
            continue;
        };

        for field in &object.fields {
            let target = field.ty.named_type();
            let node = graph.get(target).ok_or_else(|| {
                TranslateError::InvalidSchemaGraph(format!(
                    "field '{}.{}' references missing type {}",
                    object.name, field.name, target
                ))
            })?;

            if !matches!(node, TypeNode::Object(_) | TypeNode::Enum(_)) {
                continue;
            }
            if !visited.insert(target) {
                continue;
            }
            tracing::trace!(
                "Discovered {} '{}' via '{}.{}'",
                node.variant(),
                node.name(),
                object.name,
                field.name
            );
            emitted.push(target);
            queue.push_back(target);
        }
    }

    tracing::debug!(
        "Emission list for '{}' has {} types",
        root_object.name,
        emitted.len()
    );
    Ok(emitted)
}
