//! Schema graph data model.

use std::collections::HashMap;
use std::fmt;

use crate::builder::SchemaGraphBuilder;

/// Index of a type inside a [`SchemaGraph`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) usize);

impl TypeId {
    /// Position of the type in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Built-in and well-known GraphQL scalar kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Boolean,
    Float,
    Int,
    /// 64-bit integer
    Long,
    Short,
    Byte,
    Id,
    BigInteger,
    BigDecimal,
    Char,
    /// Any user-declared scalar
    Custom(String),
}

impl ScalarKind {
    /// Resolve a scalar kind from its GraphQL name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "String" => Self::String,
            "Boolean" => Self::Boolean,
            "Float" => Self::Float,
            "Int" => Self::Int,
            "Long" => Self::Long,
            "Short" => Self::Short,
            "Byte" => Self::Byte,
            "ID" => Self::Id,
            "BigInteger" => Self::BigInteger,
            "BigDecimal" => Self::BigDecimal,
            "Char" => Self::Char,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The GraphQL name of the scalar.
    pub fn name(&self) -> &str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Short => "Short",
            Self::Byte => "Byte",
            Self::Id => "ID",
            Self::BigInteger => "BigInteger",
            Self::BigDecimal => "BigDecimal",
            Self::Char => "Char",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference from a field to its type, including list and non-null modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(TypeId),
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(id: TypeId) -> Self {
        Self::Named(id)
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// The innermost named type, with every modifier stripped.
    pub fn named_type(&self) -> TypeId {
        match self {
            Self::Named(id) => *id,
            Self::NonNull(inner) | Self::List(inner) => inner.named_type(),
        }
    }

    /// Number of list modifiers wrapped around the named type.
    pub fn list_depth(&self) -> usize {
        match self {
            Self::Named(_) => 0,
            Self::NonNull(inner) => inner.list_depth(),
            Self::List(inner) => 1 + inner.list_depth(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub name: String,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    /// Values in declaration order
    pub values: Vec<EnumValueNode>,
}

/// A type in the schema graph.
///
/// Only `Scalar`, `Object` and `Enum` have a protobuf mapping. The remaining
/// variants are kept so consumers can reject them by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Scalar(ScalarKind),
    Object(ObjectType),
    Enum(EnumType),
    Interface(String),
    Union(String),
    InputObject(String),
}

impl TypeNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(kind) => kind.name(),
            Self::Object(object) => &object.name,
            Self::Enum(enumeration) => &enumeration.name,
            Self::Interface(name) | Self::Union(name) | Self::InputObject(name) => name,
        }
    }

    /// Human-readable name of the variant, used in diagnostics.
    pub fn variant(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Object(_) => "object",
            Self::Enum(_) => "enum",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
            Self::InputObject(_) => "input object",
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(enumeration) => Some(enumeration),
            _ => None,
        }
    }
}

/// An immutable GraphQL type system rooted at a query type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaGraph {
    pub(crate) types: Vec<TypeNode>,
    pub(crate) by_name: HashMap<String, TypeId>,
    pub(crate) root: TypeId,
}

impl SchemaGraph {
    pub fn builder() -> SchemaGraphBuilder {
        SchemaGraphBuilder::new()
    }

    /// Id of the root query type.
    pub fn root(&self) -> TypeId {
        self.root
    }

    /// Name of the root query type.
    pub fn root_name(&self) -> &str {
        self.get(self.root).map(TypeNode::name).unwrap_or_default()
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeNode> {
        self.types.get(id.0)
    }

    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Number of types in the arena, reachable or not.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All types in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeNode)> {
        self.types
            .iter()
            .enumerate()
            .map(|(index, node)| (TypeId(index), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kind_names_roundtrip() {
        for name in ["String", "Boolean", "Float", "Int", "Long", "ID", "Char"] {
            assert_eq!(ScalarKind::from_name(name).name(), name);
        }
        assert_eq!(
            ScalarKind::from_name("DateTime"),
            ScalarKind::Custom("DateTime".to_string())
        );
    }

    #[test]
    fn test_type_ref_strips_modifiers() {
        let id = TypeId(3);
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named(id))));
        assert_eq!(ty.named_type(), id);
        assert_eq!(ty.list_depth(), 1);

        let nested = TypeRef::list(TypeRef::list(TypeRef::named(id)));
        assert_eq!(nested.list_depth(), 2);
    }

    #[test]
    fn test_graph_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchemaGraph>();
    }
}
