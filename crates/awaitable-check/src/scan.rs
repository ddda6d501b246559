// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Extension method discovery in referenced modules.
//!
//! Extension methods are found by static scope, not by attachment to the type
//! they extend, so there is no index to consult: the whole public surface of a
//! module has to be walked. The walk is a depth-first traversal with an
//! explicit work stack, produced lazily one awaitable type at a time.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use awaitable_symbols::{Member, ModuleId, ScopeNode, SemanticModel, TypeHandle};
use rustc_hash::FxHashSet;

use crate::cancel::CancellationToken;
use crate::error::ConformanceError;
use crate::protocol::AwaitProtocol;
use crate::shape::AwaiterShape;

/// The type an extension entry-point method makes awaitable, if any.
///
/// Checks that `member` is an extension method with at least one parameter
/// whose return type is an awaiter. Name and accessibility filtering are up to
/// the caller.
pub(crate) fn extension_target(shape: &AwaiterShape<'_>, member: &Member) -> Option<TypeHandle> {
    if !member.is_extension() {
        return None;
    }
    let target = member.first_param()?;
    shape.conforms(member.return_type()).then_some(target)
}

/// Finds the types that public extension methods in a module make awaitable.
#[derive(Clone, Copy)]
pub struct ExtensionScanner<'a> {
    model: &'a dyn SemanticModel,
    protocol: &'a AwaitProtocol,
}

impl<'a> ExtensionScanner<'a> {
    pub fn new(model: &'a dyn SemanticModel, protocol: &'a AwaitProtocol) -> Self {
        Self { model, protocol }
    }

    /// Start a scan of `module`.
    ///
    /// Fails immediately when the module is unknown to the model or has no
    /// global namespace. A module flagged as holding no extension methods
    /// yields nothing. Every call starts a fresh traversal.
    pub fn awaitable_types_in(
        &self,
        module: ModuleId,
        cancel: &'a CancellationToken,
    ) -> Result<ExtensionScan<'a>, ConformanceError> {
        let info = self
            .model
            .module(module)
            .ok_or(ConformanceError::UnknownModule(module))?;
        let root = info
            .global_namespace
            .ok_or_else(|| ConformanceError::MissingGlobalNamespace { module: info.name.clone() })?;

        let stack = if info.may_contain_extension_methods {
            vec![ScopeNode::Namespace(root)]
        } else {
            tracing::trace!(module = %info.name, "module declares no extension methods, skipping");
            Vec::new()
        };

        Ok(ExtensionScan {
            model: self.model,
            protocol: self.protocol,
            cancel,
            stack,
            pending: VecDeque::new(),
            seen: FxHashSet::default(),
            finished: false,
        })
    }
}

/// A lazy, single-pass walk over one module.
///
/// Yields each awaitable type at most once. After a cancellation it yields a
/// single `Err(Cancelled)` and then ends.
pub struct ExtensionScan<'a> {
    model: &'a dyn SemanticModel,
    protocol: &'a AwaitProtocol,
    cancel: &'a CancellationToken,
    /// Namespace-or-type nodes still to visit.
    stack: Vec<ScopeNode>,
    /// Targets found at the last visited type, not yet yielded.
    pending: VecDeque<TypeHandle>,
    seen: FxHashSet<TypeHandle>,
    finished: bool,
}

impl ExtensionScan<'_> {
    fn visit_type(&mut self, ty: TypeHandle) {
        let (model, protocol) = (self.model, self.protocol);
        let shape = AwaiterShape::new(model, protocol);
        for member in model.members_named(ty, &protocol.entry_point) {
            if !member.accessibility.is_public() {
                continue;
            }
            if let Some(target) = extension_target(&shape, member) {
                tracing::trace!(
                    container = ?model.type_name(ty),
                    target = ?model.type_name(target),
                    "extension entry point found"
                );
                self.pending.push_back(target);
            }
        }
    }
}

impl Iterator for ExtensionScan<'_> {
    type Item = Result<TypeHandle, ConformanceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }
            if self.cancel.is_cancelled() {
                self.finished = true;
                self.stack.clear();
                self.pending.clear();
                return Some(Err(ConformanceError::Cancelled));
            }

            if let Some(target) = self.pending.pop_front() {
                if self.seen.insert(target) {
                    return Some(Ok(target));
                }
                continue;
            }

            let Some(node) = self.stack.pop() else {
                self.finished = true;
                return None;
            };
            // Non-public containers hide everything below them.
            if !self.model.accessibility(node).is_public() {
                continue;
            }
            if let ScopeNode::Type(ty) = node {
                self.visit_type(ty);
            }
            // Reversed so children are visited in declaration order.
            self.stack.extend(self.model.children(node).into_iter().rev());
        }
    }
}

impl FusedIterator for ExtensionScan<'_> {}
