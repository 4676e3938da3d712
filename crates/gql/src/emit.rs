//! Rendering of individual `message` blocks.

use std::collections::HashSet;

use gqlproto_schema::{EnumType, FieldNode, ObjectType, SchemaGraph, TypeNode};

use crate::error::{Result, TranslateError};
use crate::scalar::proto_primitive;

/// Render an object type as a protobuf message.
///
/// Field numbers are positional, starting at 1. A message without fields
/// still carries its `message_id` option.
pub fn render_message(
    graph: &SchemaGraph,
    object: &ObjectType,
    message_id_prefix: &str,
) -> Result<String> {
    let mut output = String::new();
    output.push_str(&format!("message {} {{\n", object.name));
    output.push_str(&format!(
        "option (jspb.message_id) = \"{}.{}\";\n",
        message_id_prefix, object.name
    ));

    let mut seen: HashSet<&str> = HashSet::new();
    for (index, field) in object.fields.iter().enumerate() {
        if !seen.insert(&field.name) {
            return Err(TranslateError::InvalidSchemaGraph(format!(
                "field '{}' is declared more than once in '{}'",
                field.name, object.name
            )));
        }
        let field_type = field_type(graph, object, field)?;
        output.push_str(&format!("{} {} = {};\n", field_type, field.name, index + 1));
    }

    output.push('}');
    tracing::trace!(
        "Rendered message '{}' with {} fields",
        object.name,
        object.fields.len()
    );
    Ok(output)
}

/// Render an enum type as a wrapper message holding a nested `Enum`.
///
/// The wrapper's `option` and `enum` lines are indented by one space, the
/// values are not. Ordinals are positional, starting at 0.
pub fn render_enum(enumeration: &EnumType, message_id_prefix: &str) -> Result<String> {
    let mut output = String::new();
    output.push_str(&format!("message {} {{\n", enumeration.name));
    output.push_str(&format!(
        " option (jspb.message_id) = \"{}.{}\";\n",
        message_id_prefix, enumeration.name
    ));
    output.push_str(" enum Enum {\n");

    let mut seen: HashSet<&str> = HashSet::new();
    for (ordinal, value) in enumeration.values.iter().enumerate() {
        if !seen.insert(&value.name) {
            return Err(TranslateError::InvalidSchemaGraph(format!(
                "value '{}' is declared more than once in enum '{}'",
                value.name, enumeration.name
            )));
        }
        output.push_str(&format!("{} = {};\n", value.name, ordinal));
    }

    output.push_str("}\n}");
    tracing::trace!(
        "Rendered enum '{}' with {} values",
        enumeration.name,
        enumeration.values.len()
    );
    Ok(output)
}

/// Protobuf type of a field: `[repeated ]<primitive | Message | Enum.Enum>`.
fn field_type(graph: &SchemaGraph, owner: &ObjectType, field: &FieldNode) -> Result<String> {
    let unsupported = |variant: &str| TranslateError::UnsupportedTypeVariant {
        owner: owner.name.clone(),
        field: field.name.clone(),
        variant: variant.to_string(),
    };

    let list_depth = field.ty.list_depth();
    if list_depth > 1 {
        return Err(unsupported("nested list"));
    }

    let target = field.ty.named_type();
    let base = match graph.get(target) {
        Some(TypeNode::Scalar(kind)) => proto_primitive(kind)
            .ok_or_else(|| TranslateError::UnsupportedScalarKind {
                owner: owner.name.clone(),
                field: field.name.clone(),
                kind: kind.name().to_string(),
            })?
            .to_string(),
        Some(TypeNode::Enum(enumeration)) => format!("{}.Enum", enumeration.name),
        Some(TypeNode::Object(object)) => object.name.clone(),
        Some(other) => return Err(unsupported(other.variant())),
        None => {
            return Err(TranslateError::InvalidSchemaGraph(format!(
                "field '{}.{}' references missing type {}",
                owner.name, field.name, target
            )))
        }
    };

    if list_depth == 1 {
        Ok(format!("repeated {}", base))
    } else {
        Ok(base)
    }
}
