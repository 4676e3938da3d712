//! Protocol Buffers generation from GraphQL schema graphs.
//!
//! This crate walks the types reachable from a schema's root query type and
//! renders each object and enum type as a proto3 `message`, behind a fixed
//! header. Translation is pure: the same graph always yields the same text.
//!
//! # Example
//!
//! ```
//! use gqlproto::schema::SchemaGraph;
//!
//! let graph = SchemaGraph::from_sdl("type Query { name: String }")?;
//! let proto = gqlproto::translate(&graph)?;
//! assert!(proto.ends_with("string name = 1;\n}"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod document;
mod emit;
mod error;
mod scalar;
mod walker;

pub use document::{
    translate, ProtoOptions, Translator, DEFAULT_JAVA_PACKAGE, DEFAULT_JSPB_IMPORT,
    DEFAULT_JS_NAMESPACE, DEFAULT_MESSAGE_ID_PREFIX, DEFAULT_PACKAGE,
};
pub use emit::{render_enum, render_message};
pub use error::{Result, TranslateError};
pub use scalar::proto_primitive;
pub use walker::emission_list;

// Re-export the graph model so callers need a single dependency
pub use gqlproto_schema as schema;
