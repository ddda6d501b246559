// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Shared graph builders for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use awaitable_check::{CancellationToken, GET_RESULT, IS_COMPLETED, ON_COMPLETED};
use awaitable_symbols::{
    Accessibility, Member, ModuleId, ModuleInfo, ScopeNode, SemanticModel, SymbolGraph, TypeHandle,
};

/// Add an awaiter type to `parent`, leaving out any member named in `skip`.
pub fn add_awaiter(
    graph: &mut SymbolGraph,
    parent: ScopeNode,
    name: &str,
    skip: &[&str],
) -> TypeHandle {
    let ty = graph.add_type(parent, name, Accessibility::Public).unwrap();
    let unit = graph.lookup_type("Boolean").unwrap_or(ty);
    if !skip.contains(&GET_RESULT) {
        graph.add_member(ty, Member::method(GET_RESULT, vec![], None)).unwrap();
    }
    if !skip.contains(&ON_COMPLETED) {
        graph.add_member(ty, Member::method(ON_COMPLETED, vec![unit], None)).unwrap();
    }
    if !skip.contains(&IS_COMPLETED) {
        graph.add_member(ty, Member::property(IS_COMPLETED, unit)).unwrap();
    }
    ty
}

pub fn module_root(
    graph: &mut SymbolGraph,
    name: &str,
    may_contain_extension_methods: bool,
) -> (ModuleId, ScopeNode) {
    let id = graph.add_module(name, may_contain_extension_methods);
    let root = ScopeNode::Namespace(graph.module_namespace(id).unwrap());
    (id, root)
}

pub fn program_root(graph: &SymbolGraph) -> ScopeNode {
    ScopeNode::Namespace(graph.program_namespace())
}

/// A model wrapper that counts how often module trees are entered.
pub struct CountingModel {
    pub inner: SymbolGraph,
    module_lookups: AtomicUsize,
}

impl CountingModel {
    pub fn new(inner: SymbolGraph) -> Self {
        Self { inner, module_lookups: AtomicUsize::new(0) }
    }

    pub fn module_lookups(&self) -> usize {
        self.module_lookups.load(Ordering::SeqCst)
    }
}

impl SemanticModel for CountingModel {
    fn members_named(&self, ty: TypeHandle, name: &str) -> Vec<&Member> {
        self.inner.members_named(ty, name)
    }

    fn local_members_named(&self, name: &str) -> Vec<&Member> {
        self.inner.local_members_named(name)
    }

    fn module(&self, id: ModuleId) -> Option<&ModuleInfo> {
        self.module_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.module(id)
    }

    fn accessibility(&self, node: ScopeNode) -> Accessibility {
        self.inner.accessibility(node)
    }

    fn children(&self, node: ScopeNode) -> Vec<ScopeNode> {
        self.inner.children(node)
    }

    fn type_name(&self, ty: TypeHandle) -> Option<&str> {
        self.inner.type_name(ty)
    }
}

/// A model wrapper that cancels `token` the first time a scope's children
/// are listed, so cancellation lands in the middle of a module walk.
pub struct CancellingModel {
    pub inner: SymbolGraph,
    token: CancellationToken,
}

impl CancellingModel {
    pub fn new(inner: SymbolGraph, token: CancellationToken) -> Self {
        Self { inner, token }
    }
}

impl SemanticModel for CancellingModel {
    fn members_named(&self, ty: TypeHandle, name: &str) -> Vec<&Member> {
        self.inner.members_named(ty, name)
    }

    fn local_members_named(&self, name: &str) -> Vec<&Member> {
        self.inner.local_members_named(name)
    }

    fn module(&self, id: ModuleId) -> Option<&ModuleInfo> {
        self.inner.module(id)
    }

    fn accessibility(&self, node: ScopeNode) -> Accessibility {
        self.inner.accessibility(node)
    }

    fn children(&self, node: ScopeNode) -> Vec<ScopeNode> {
        self.token.cancel();
        self.inner.children(node)
    }

    fn type_name(&self, ty: TypeHandle) -> Option<&str> {
        self.inner.type_name(ty)
    }
}
