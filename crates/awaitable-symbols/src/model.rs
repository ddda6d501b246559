// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The query surface a compiler front end presents to the checker.

use serde::{Deserialize, Serialize};

use crate::handle::{ModuleId, NamespaceId, ScopeNode, TypeHandle};
use crate::member::{Accessibility, Member};

/// A referenced unit of compiled code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    /// Root of the module's declaration tree. A well-formed module always has one.
    pub global_namespace: Option<NamespaceId>,
    /// Cleared when the module is known to declare no extension methods.
    pub may_contain_extension_methods: bool,
}

/// Read-only view of one program snapshot and the modules it references.
///
/// Implementations must be safe to query from many threads at once; none of
/// the methods mutate the model.
pub trait SemanticModel: Send + Sync {
    /// Members of `ty` whose name is exactly `name`. Unknown types have no members.
    fn members_named(&self, ty: TypeHandle, name: &str) -> Vec<&Member>;

    /// Members named `name` declared anywhere in the program being compiled.
    fn local_members_named(&self, name: &str) -> Vec<&Member>;

    fn module(&self, id: ModuleId) -> Option<&ModuleInfo>;

    fn accessibility(&self, node: ScopeNode) -> Accessibility;

    /// Namespaces and types nested directly inside `node`.
    fn children(&self, node: ScopeNode) -> Vec<ScopeNode>;

    /// Display name, for logging.
    fn type_name(&self, ty: TypeHandle) -> Option<&str>;
}
