// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Graph builders shared by unit tests.

use std::sync::Arc;

use awaitable_symbols::{Accessibility, Member, ModuleId, ScopeNode, SymbolGraph, TypeHandle};

use crate::context::CompilationContext;
use crate::protocol::{AwaitProtocol, GET_RESULT, IS_COMPLETED, ON_COMPLETED};

pub(crate) struct Fixture {
    pub graph: SymbolGraph,
    pub bool_ty: TypeHandle,
    pub action_ty: TypeHandle,
}

impl Fixture {
    /// A graph with a `System` module (no extension methods) holding `Boolean` and `Action`.
    pub fn new() -> Self {
        let mut graph = SymbolGraph::new();
        let system = graph.add_module("System", false);
        let root = ScopeNode::Namespace(graph.module_namespace(system).unwrap());
        let bool_ty = graph.add_type(root, "Boolean", Accessibility::Public).unwrap();
        let action_ty = graph.add_type(root, "Action", Accessibility::Public).unwrap();
        Self { graph, bool_ty, action_ty }
    }

    pub fn program(&self) -> ScopeNode {
        ScopeNode::Namespace(self.graph.program_namespace())
    }

    pub fn module(
        &mut self,
        name: &str,
        may_contain_extension_methods: bool,
    ) -> (ModuleId, ScopeNode) {
        let id = self.graph.add_module(name, may_contain_extension_methods);
        let root = ScopeNode::Namespace(self.graph.module_namespace(id).unwrap());
        (id, root)
    }

    pub fn plain_type(&mut self, parent: ScopeNode, name: &str) -> TypeHandle {
        self.graph.add_type(parent, name, Accessibility::Public).unwrap()
    }

    pub fn class(&mut self, parent: ScopeNode, name: &str, access: Accessibility) -> TypeHandle {
        self.graph.add_type(parent, name, access).unwrap()
    }

    /// An awaiter with all three required members.
    pub fn awaiter(&mut self, parent: ScopeNode, name: &str) -> TypeHandle {
        self.awaiter_missing(parent, name, "")
    }

    /// An awaiter lacking the member called `missing`.
    pub fn awaiter_missing(&mut self, parent: ScopeNode, name: &str, missing: &str) -> TypeHandle {
        let ty = self.plain_type(parent, name);
        if missing != GET_RESULT {
            self.member(ty, Member::method(GET_RESULT, vec![], None));
        }
        if missing != ON_COMPLETED {
            self.member(ty, Member::method(ON_COMPLETED, vec![self.action_ty], None));
        }
        if missing != IS_COMPLETED {
            self.member(ty, Member::property(IS_COMPLETED, self.bool_ty));
        }
        ty
    }

    pub fn member(&mut self, ty: TypeHandle, member: Member) {
        self.graph.add_member(ty, member).unwrap();
    }

    pub fn into_context(self, references: Vec<ModuleId>) -> CompilationContext {
        CompilationContext::new(Arc::new(self.graph), references)
    }

    pub fn into_context_with(
        self,
        references: Vec<ModuleId>,
        protocol: AwaitProtocol,
    ) -> CompilationContext {
        CompilationContext::with_protocol(Arc::new(self.graph), references, protocol)
    }
}
