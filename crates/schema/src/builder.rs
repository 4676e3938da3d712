//! Programmatic construction of a [`SchemaGraph`].
//!
//! Types are declared first and filled in afterwards, so fields may point at
//! types declared later, at their owner, or at each other in a cycle.

use std::collections::HashMap;

use crate::graph::{
    EnumType, EnumValueNode, FieldNode, ObjectType, ScalarKind, SchemaGraph, TypeId, TypeNode,
    TypeRef,
};
use crate::{Result, SchemaError};

#[derive(Debug, Default)]
pub struct SchemaGraphBuilder {
    types: Vec<TypeNode>,
    by_name: HashMap<String, TypeId>,
}

impl SchemaGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an object type with no fields.
    pub fn object(&mut self, name: impl Into<String>) -> Result<TypeId> {
        let name = name.into();
        self.declare(
            name.clone(),
            TypeNode::Object(ObjectType {
                name,
                fields: Vec::new(),
            }),
        )
    }

    /// Declare an enum type with the given values, in order.
    pub fn enumeration<I, S>(&mut self, name: impl Into<String>, values: I) -> Result<TypeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let values = values
            .into_iter()
            .map(|value| EnumValueNode { name: value.into() })
            .collect();
        self.declare(name.clone(), TypeNode::Enum(EnumType { name, values }))
    }

    /// Get or declare a scalar. Scalars are interned by name.
    pub fn scalar(&mut self, kind: ScalarKind) -> Result<TypeId> {
        match self.by_name.get(kind.name()) {
            Some(&id) if matches!(self.types[id.0], TypeNode::Scalar(_)) => Ok(id),
            Some(_) => Err(SchemaError::DuplicateType(kind.name().to_string())),
            None => self.declare(kind.name().to_string(), TypeNode::Scalar(kind)),
        }
    }

    pub fn interface(&mut self, name: impl Into<String>) -> Result<TypeId> {
        let name = name.into();
        self.declare(name.clone(), TypeNode::Interface(name))
    }

    pub fn union(&mut self, name: impl Into<String>) -> Result<TypeId> {
        let name = name.into();
        self.declare(name.clone(), TypeNode::Union(name))
    }

    pub fn input_object(&mut self, name: impl Into<String>) -> Result<TypeId> {
        let name = name.into();
        self.declare(name.clone(), TypeNode::InputObject(name))
    }

    /// Append a field to a declared object type.
    ///
    /// Field names are not checked for uniqueness here.
    pub fn field(&mut self, owner: TypeId, name: impl Into<String>, ty: TypeRef) -> Result<()> {
        self.check_id(ty.named_type())?;
        match self.node_mut(owner)? {
            TypeNode::Object(object) => {
                object.fields.push(FieldNode {
                    name: name.into(),
                    ty,
                });
                Ok(())
            }
            other => Err(SchemaError::NotAnObject(other.name().to_string())),
        }
    }

    /// Append a value to a declared enum type.
    pub fn value(&mut self, owner: TypeId, name: impl Into<String>) -> Result<()> {
        match self.node_mut(owner)? {
            TypeNode::Enum(enumeration) => {
                enumeration.values.push(EnumValueNode { name: name.into() });
                Ok(())
            }
            other => Err(SchemaError::NotAnEnum(other.name().to_string())),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Finish the graph with `root` as the query type.
    pub fn build(self, root: TypeId) -> Result<SchemaGraph> {
        match self.types.get(root.0) {
            Some(TypeNode::Object(_)) => {}
            Some(other) => return Err(SchemaError::InvalidRoot(other.name().to_string())),
            None => return Err(SchemaError::UnknownTypeId(root.0)),
        }

        tracing::debug!(
            "Built schema graph with {} types, root '{}'",
            self.types.len(),
            self.types[root.0].name()
        );

        Ok(SchemaGraph {
            types: self.types,
            by_name: self.by_name,
            root,
        })
    }

    fn declare(&mut self, name: String, node: TypeNode) -> Result<TypeId> {
        if self.by_name.contains_key(&name) {
            return Err(SchemaError::DuplicateType(name));
        }
        let id = TypeId(self.types.len());
        self.types.push(node);
        self.by_name.insert(name, id);
        Ok(id)
    }

    fn check_id(&self, id: TypeId) -> Result<()> {
        if id.0 < self.types.len() {
            Ok(())
        } else {
            Err(SchemaError::UnknownTypeId(id.0))
        }
    }

    fn node_mut(&mut self, id: TypeId) -> Result<&mut TypeNode> {
        self.types
            .get_mut(id.0)
            .ok_or(SchemaError::UnknownTypeId(id.0))
    }
}
