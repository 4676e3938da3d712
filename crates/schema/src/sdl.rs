//! Load a [`SchemaGraph`] from GraphQL SDL.
//!
//! Parsing is delegated to `graphql-parser`; this module only maps the parsed
//! document onto the arena. Descriptions, directives and field arguments are
//! ignored. `extend type` and `extend enum` append to the extended type after
//! its own fields or values.

use graphql_parser::schema::{
    parse_schema, Definition, Document, Field, Type, TypeDefinition, TypeExtension,
};

use crate::builder::SchemaGraphBuilder;
use crate::graph::{ScalarKind, SchemaGraph, TypeId, TypeRef};
use crate::{Result, SchemaError};

/// Scalars every GraphQL schema has without declaring them.
const BUILTIN_SCALARS: [&str; 5] = ["String", "Boolean", "Float", "Int", "ID"];

/// Name of the root type when the document has no `schema { query: ... }`.
const DEFAULT_QUERY_TYPE: &str = "Query";

impl SchemaGraph {
    /// Build a schema graph from SDL text.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlproto_schema::SchemaGraph;
    ///
    /// let graph = SchemaGraph::from_sdl("type Query { name: String }")?;
    /// assert_eq!(graph.root_name(), "Query");
    /// # Ok::<(), gqlproto_schema::SchemaError>(())
    /// ```
    pub fn from_sdl(sdl: &str) -> Result<Self> {
        let doc = parse_schema::<String>(sdl).map_err(|e| SchemaError::Parse(e.to_string()))?;
        graph_from_document(&doc)
    }
}

fn graph_from_document(doc: &Document<'_, String>) -> Result<SchemaGraph> {
    let mut builder = SchemaGraphBuilder::new();
    let mut query_name: Option<String> = None;

    // First pass: declare every named type so fields can reference any of them
    for def in &doc.definitions {
        match def {
            Definition::SchemaDefinition(schema) => {
                if let Some(query) = &schema.query {
                    query_name = Some(query.clone());
                }
            }
            Definition::TypeDefinition(typedef) => {
                declare_type(&mut builder, typedef)?;
            }
            _ => {}
        }
    }

    // Second pass: attach fields
    for def in &doc.definitions {
        if let Definition::TypeDefinition(TypeDefinition::Object(object)) = def {
            attach_fields(&mut builder, &object.name, &object.fields)?;
        }
    }

    // Third pass: extensions, in document order
    for def in &doc.definitions {
        if let Definition::TypeExtension(extension) = def {
            apply_extension(&mut builder, extension)?;
        }
    }

    let query_name = query_name.unwrap_or_else(|| DEFAULT_QUERY_TYPE.to_string());
    let root = builder.lookup(&query_name).ok_or(SchemaError::MissingRoot)?;
    builder.build(root)
}

fn declare_type(builder: &mut SchemaGraphBuilder, typedef: &TypeDefinition<'_, String>) -> Result<()> {
    match typedef {
        TypeDefinition::Scalar(scalar) => {
            builder.scalar(ScalarKind::from_name(&scalar.name))?;
        }
        TypeDefinition::Object(object) => {
            builder.object(object.name.clone())?;
        }
        TypeDefinition::Enum(e) => {
            builder.enumeration(e.name.clone(), e.values.iter().map(|v| v.name.clone()))?;
        }
        TypeDefinition::Interface(interface) => {
            builder.interface(interface.name.clone())?;
        }
        TypeDefinition::Union(union) => {
            builder.union(union.name.clone())?;
        }
        TypeDefinition::InputObject(input) => {
            builder.input_object(input.name.clone())?;
        }
    }
    Ok(())
}

fn attach_fields(
    builder: &mut SchemaGraphBuilder,
    owner: &str,
    fields: &[Field<'_, String>],
) -> Result<()> {
    let owner = builder
        .lookup(owner)
        .ok_or_else(|| SchemaError::UnknownType(owner.to_string()))?;
    for field in fields {
        let ty = resolve_type(builder, &field.field_type)?;
        builder.field(owner, field.name.clone(), ty)?;
    }
    Ok(())
}

fn apply_extension(
    builder: &mut SchemaGraphBuilder,
    extension: &TypeExtension<'_, String>,
) -> Result<()> {
    match extension {
        TypeExtension::Object(object) => attach_fields(builder, &object.name, &object.fields),
        TypeExtension::Enum(e) => {
            let owner = builder
                .lookup(&e.name)
                .ok_or_else(|| SchemaError::UnknownType(e.name.clone()))?;
            for value in &e.values {
                builder.value(owner, value.name.clone())?;
            }
            Ok(())
        }
        // Only the names of these types are kept
        TypeExtension::Scalar(ext) => require_declared(builder, &ext.name),
        TypeExtension::Interface(ext) => require_declared(builder, &ext.name),
        TypeExtension::Union(ext) => require_declared(builder, &ext.name),
        TypeExtension::InputObject(ext) => require_declared(builder, &ext.name),
    }
}

fn require_declared(builder: &SchemaGraphBuilder, name: &str) -> Result<()> {
    builder
        .lookup(name)
        .map(|_| ())
        .ok_or_else(|| SchemaError::UnknownType(name.to_string()))
}

fn resolve_type(builder: &mut SchemaGraphBuilder, ty: &Type<'_, String>) -> Result<TypeRef> {
    match ty {
        Type::NamedType(name) => Ok(TypeRef::named(resolve_name(builder, name)?)),
        Type::NonNullType(inner) => Ok(TypeRef::non_null(resolve_type(builder, inner)?)),
        Type::ListType(inner) => Ok(TypeRef::list(resolve_type(builder, inner)?)),
    }
}

fn resolve_name(builder: &mut SchemaGraphBuilder, name: &str) -> Result<TypeId> {
    if let Some(id) = builder.lookup(name) {
        return Ok(id);
    }
    if BUILTIN_SCALARS.contains(&name) {
        return builder.scalar(ScalarKind::from_name(name));
    }
    Err(SchemaError::UnknownType(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TypeNode;

    #[test]
    fn test_default_query_root() {
        let graph = SchemaGraph::from_sdl("type Query { id: ID! }").unwrap();
        assert_eq!(graph.root_name(), "Query");

        let root = graph.get(graph.root()).and_then(TypeNode::as_object).unwrap();
        assert_eq!(root.fields.len(), 1);
        assert!(matches!(root.fields[0].ty, TypeRef::NonNull(_)));
    }

    #[test]
    fn test_schema_definition_selects_root() {
        let graph = SchemaGraph::from_sdl(
            "schema { query: queryType }\n type queryType { count: Int }\n type Query { x: Int }",
        )
        .unwrap();
        assert_eq!(graph.root_name(), "queryType");
    }

    #[test]
    fn test_declared_scalars_resolve_kind() {
        let graph = SchemaGraph::from_sdl("scalar Long\n type Query { big: Long }").unwrap();
        let id = graph.lookup("Long").unwrap();
        assert_eq!(graph.get(id), Some(&TypeNode::Scalar(ScalarKind::Long)));
    }

    #[test]
    fn test_undeclared_type_is_error() {
        let err = SchemaGraph::from_sdl("type Query { when: DateTime }").unwrap_err();
        assert_eq!(err, SchemaError::UnknownType("DateTime".to_string()));
    }

    #[test]
    fn test_missing_root_is_error() {
        let err = SchemaGraph::from_sdl("type Thing { a: Int }").unwrap_err();
        assert_eq!(err, SchemaError::MissingRoot);
    }

    #[test]
    fn test_extend_type_appends_fields() {
        let graph = SchemaGraph::from_sdl(
            "extend type Query { c: Boolean }\n type Query { a: Int }\n extend type Query { b: String }",
        )
        .unwrap();
        let root = graph.get(graph.root()).and_then(TypeNode::as_object).unwrap();
        let names: Vec<&str> = root.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "c", "b"]);
    }

    #[test]
    fn test_extend_enum_appends_values() {
        let graph = SchemaGraph::from_sdl(
            "type Query { color: Color }\n enum Color { RED }\n extend enum Color { GREEN BLUE }",
        )
        .unwrap();
        let color = graph.lookup("Color").unwrap();
        let values: Vec<&str> = graph
            .get(color)
            .and_then(TypeNode::as_enum)
            .unwrap()
            .values
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(values, ["RED", "GREEN", "BLUE"]);
    }

    #[test]
    fn test_extend_unknown_type_is_error() {
        let err = SchemaGraph::from_sdl("type Query { a: Int }\n extend type Missing { b: Int }")
            .unwrap_err();
        assert_eq!(err, SchemaError::UnknownType("Missing".to_string()));

        let err = SchemaGraph::from_sdl("type Query { a: Int }\n extend interface Nowhere { b: Int }")
            .unwrap_err();
        assert_eq!(err, SchemaError::UnknownType("Nowhere".to_string()));
    }

    #[test]
    fn test_extend_type_of_enum_is_error() {
        let err = SchemaGraph::from_sdl(
            "type Query { color: Color }\n enum Color { RED }\n extend type Color { shade: Int }",
        )
        .unwrap_err();
        assert_eq!(err, SchemaError::NotAnObject("Color".to_string()));
    }

    #[test]
    fn test_duplicate_type_definition_is_error() {
        let err = SchemaGraph::from_sdl("type Query { a: Int }\n enum Query { X }").unwrap_err();
        assert_eq!(err, SchemaError::DuplicateType("Query".to_string()));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = SchemaGraph::from_sdl("type Query {").unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }
}
