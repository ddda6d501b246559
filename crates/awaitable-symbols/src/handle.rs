// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Opaque handles into the symbol model.

use serde::{Deserialize, Serialize};

/// Identity of a type as known by the semantic model.
///
/// The model canonicalizes aliases and instantiations, so two handles compare
/// equal exactly when they name the same type within one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeHandle(pub u32);

/// Unique identifier for a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceId(pub u32);

/// Unique identifier for a referenced dependency module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub u32);

/// A namespace-or-type node in a module's declaration tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeNode {
    Namespace(NamespaceId),
    Type(TypeHandle),
}

impl ScopeNode {
    /// The type handle, if this node is a type.
    pub fn as_type(self) -> Option<TypeHandle> {
        match self {
            ScopeNode::Type(ty) => Some(ty),
            ScopeNode::Namespace(_) => None,
        }
    }
}
