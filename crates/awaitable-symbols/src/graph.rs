// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! In-memory symbol graph.
//!
//! Namespaces, types and modules live in flat tables indexed by their ids.
//! The program being compiled has its own global namespace; every referenced
//! module gets another one (unless it is built malformed on purpose).

use serde::{Deserialize, Serialize};

use crate::error::SymbolError;
use crate::handle::{ModuleId, NamespaceId, ScopeNode, TypeHandle};
use crate::member::{Accessibility, Member};
use crate::model::{ModuleInfo, SemanticModel};

/// Which compilation unit declares a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Owner {
    Program,
    Module(ModuleId),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NamespaceSymbol {
    name: String,
    owner: Owner,
    children: Vec<ScopeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TypeSymbol {
    name: String,
    accessibility: Accessibility,
    owner: Owner,
    members: Vec<Member>,
    nested: Vec<TypeHandle>,
}

/// A complete program snapshot: the program's own declarations plus every
/// referenced module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolGraph {
    namespaces: Vec<NamespaceSymbol>,
    types: Vec<TypeSymbol>,
    modules: Vec<ModuleInfo>,
    program: NamespaceId,
}

impl Default for SymbolGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolGraph {
    /// Create a graph holding only the program's empty global namespace.
    pub fn new() -> Self {
        Self {
            namespaces: vec![NamespaceSymbol {
                name: String::new(),
                owner: Owner::Program,
                children: Vec::new(),
            }],
            types: Vec::new(),
            modules: Vec::new(),
            program: NamespaceId(0),
        }
    }

    /// Load a snapshot previously written by [`SymbolGraph::to_json`].
    pub fn from_json(json: &str) -> Result<Self, SymbolError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SymbolError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The program's global namespace.
    pub fn program_namespace(&self) -> NamespaceId {
        self.program
    }

    /// Register a referenced module with its own global namespace.
    pub fn add_module(
        &mut self,
        name: impl Into<String>,
        may_contain_extension_methods: bool,
    ) -> ModuleId {
        let id = ModuleId(self.modules.len() as u32);
        let root = self.push_namespace(String::new(), Owner::Module(id));
        self.modules.push(ModuleInfo {
            name: name.into(),
            global_namespace: Some(root),
            may_contain_extension_methods,
        });
        id
    }

    /// Register a module whose global namespace could not be resolved.
    pub fn add_module_without_namespace(
        &mut self,
        name: impl Into<String>,
        may_contain_extension_methods: bool,
    ) -> ModuleId {
        let id = ModuleId(self.modules.len() as u32);
        self.modules.push(ModuleInfo {
            name: name.into(),
            global_namespace: None,
            may_contain_extension_methods,
        });
        id
    }

    pub fn module_namespace(&self, id: ModuleId) -> Result<NamespaceId, SymbolError> {
        self.modules
            .get(id.0 as usize)
            .and_then(|m| m.global_namespace)
            .ok_or(SymbolError::UnknownModule(id))
    }

    /// Add a namespace nested inside `parent`.
    pub fn add_namespace(
        &mut self,
        parent: NamespaceId,
        name: impl Into<String>,
    ) -> Result<NamespaceId, SymbolError> {
        let owner = self
            .namespaces
            .get(parent.0 as usize)
            .map(|ns| ns.owner)
            .ok_or(SymbolError::UnknownNamespace(parent))?;
        let id = self.push_namespace(name.into(), owner);
        self.namespaces[parent.0 as usize].children.push(ScopeNode::Namespace(id));
        Ok(id)
    }

    /// Add a type inside a namespace, or nested inside another type.
    pub fn add_type(
        &mut self,
        parent: ScopeNode,
        name: impl Into<String>,
        accessibility: Accessibility,
    ) -> Result<TypeHandle, SymbolError> {
        let owner = self.owner_of(parent)?;
        let handle = TypeHandle(self.types.len() as u32);
        self.types.push(TypeSymbol {
            name: name.into(),
            accessibility,
            owner,
            members: Vec::new(),
            nested: Vec::new(),
        });
        match parent {
            ScopeNode::Namespace(ns) => {
                self.namespaces[ns.0 as usize].children.push(ScopeNode::Type(handle))
            }
            ScopeNode::Type(outer) => self.types[outer.0 as usize].nested.push(handle),
        }
        Ok(handle)
    }

    pub fn add_member(&mut self, ty: TypeHandle, member: Member) -> Result<(), SymbolError> {
        let def = self
            .types
            .get_mut(ty.0 as usize)
            .ok_or(SymbolError::UnknownType(ty))?;
        def.members.push(member);
        Ok(())
    }

    /// Find the first type declared with `name`.
    pub fn lookup_type(&self, name: &str) -> Option<TypeHandle> {
        self.types
            .iter()
            .position(|t| t.name == name)
            .map(|i| TypeHandle(i as u32))
    }

    fn push_namespace(&mut self, name: String, owner: Owner) -> NamespaceId {
        let id = NamespaceId(self.namespaces.len() as u32);
        self.namespaces.push(NamespaceSymbol { name, owner, children: Vec::new() });
        id
    }

    fn owner_of(&self, node: ScopeNode) -> Result<Owner, SymbolError> {
        match node {
            ScopeNode::Namespace(ns) => self
                .namespaces
                .get(ns.0 as usize)
                .map(|n| n.owner)
                .ok_or(SymbolError::UnknownNamespace(ns)),
            ScopeNode::Type(ty) => self
                .types
                .get(ty.0 as usize)
                .map(|t| t.owner)
                .ok_or(SymbolError::UnknownType(ty)),
        }
    }
}

impl SemanticModel for SymbolGraph {
    fn members_named(&self, ty: TypeHandle, name: &str) -> Vec<&Member> {
        match self.types.get(ty.0 as usize) {
            Some(def) => def.members.iter().filter(|m| m.name == name).collect(),
            None => Vec::new(),
        }
    }

    fn local_members_named(&self, name: &str) -> Vec<&Member> {
        self.types
            .iter()
            .filter(|t| t.owner == Owner::Program)
            .flat_map(|t| t.members.iter())
            .filter(|m| m.name == name)
            .collect()
    }

    fn module(&self, id: ModuleId) -> Option<&ModuleInfo> {
        self.modules.get(id.0 as usize)
    }

    fn accessibility(&self, node: ScopeNode) -> Accessibility {
        match node {
            ScopeNode::Namespace(ns) if (ns.0 as usize) < self.namespaces.len() => {
                Accessibility::Public
            }
            ScopeNode::Namespace(_) => Accessibility::Private,
            ScopeNode::Type(ty) => self
                .types
                .get(ty.0 as usize)
                .map(|t| t.accessibility)
                .unwrap_or(Accessibility::Private),
        }
    }

    fn children(&self, node: ScopeNode) -> Vec<ScopeNode> {
        match node {
            ScopeNode::Namespace(ns) => self
                .namespaces
                .get(ns.0 as usize)
                .map(|n| n.children.clone())
                .unwrap_or_default(),
            ScopeNode::Type(ty) => self
                .types
                .get(ty.0 as usize)
                .map(|t| t.nested.iter().copied().map(ScopeNode::Type).collect())
                .unwrap_or_default(),
        }
    }

    fn type_name(&self, ty: TypeHandle) -> Option<&str> {
        self.types.get(ty.0 as usize).map(|t| t.name.as_str())
    }
}
