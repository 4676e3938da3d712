//! # gqlproto-schema
//!
//! In-memory GraphQL type system consumed by the `gqlproto` translator.
//!
//! Types live in an arena owned by [`SchemaGraph`] and refer to each other
//! through [`TypeId`] indices, so shared and cyclic references are plain data.
//!
//! ## Modules
//!
//! - `graph`: the schema graph, type nodes, fields and type references
//! - `builder`: programmatic construction with [`SchemaGraphBuilder`]
//! - `sdl`: loading a graph from GraphQL SDL text
//!
//! ## Usage
//!
//! ```
//! use gqlproto_schema::{ScalarKind, SchemaGraph, TypeRef};
//!
//! let mut builder = SchemaGraph::builder();
//! let query = builder.object("queryType")?;
//! let string = builder.scalar(ScalarKind::String)?;
//! builder.field(query, "name", TypeRef::named(string))?;
//! let graph = builder.build(query)?;
//!
//! assert_eq!(graph.root_name(), "queryType");
//! # Ok::<(), gqlproto_schema::SchemaError>(())
//! ```

pub mod builder;
pub mod graph;
pub mod sdl;

use thiserror::Error;

pub use builder::SchemaGraphBuilder;
pub use graph::{
    EnumType, EnumValueNode, FieldNode, ObjectType, ScalarKind, SchemaGraph, TypeId, TypeNode,
    TypeRef,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("SDL parsing error: {0}")]
    Parse(String),

    #[error("Type '{0}' is declared more than once")]
    DuplicateType(String),

    #[error("Unknown type '{0}'")]
    UnknownType(String),

    #[error("Type id {0} does not belong to this schema")]
    UnknownTypeId(usize),

    #[error("Type '{0}' is not an object type")]
    NotAnObject(String),

    #[error("Type '{0}' is not an enum type")]
    NotAnEnum(String),

    #[error("Root query type '{0}' must be a named object type")]
    InvalidRoot(String),

    #[error("Schema does not define a root query type")]
    MissingRoot,
}

pub type Result<T> = std::result::Result<T, SchemaError>;
