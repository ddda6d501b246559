// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Awaiter shape matching.
//!
//! An awaiter is any type with a zero-argument result method, a continuation
//! registration method of any arity, and a completion property. Accessibility
//! is not considered here; callers filter visibility when they pick the
//! method whose return type is being checked.

use awaitable_symbols::{SemanticModel, TypeHandle};

use crate::protocol::AwaitProtocol;

/// Pure structural predicate over a model.
#[derive(Clone, Copy)]
pub struct AwaiterShape<'a> {
    model: &'a dyn SemanticModel,
    protocol: &'a AwaitProtocol,
}

impl<'a> AwaiterShape<'a> {
    pub fn new(model: &'a dyn SemanticModel, protocol: &'a AwaitProtocol) -> Self {
        Self { model, protocol }
    }

    /// Whether `ty` satisfies the awaiter shape. An absent type never does.
    pub fn conforms(&self, ty: Option<TypeHandle>) -> bool {
        match ty {
            Some(ty) => self.has_result(ty) && self.has_continuation(ty) && self.has_completion(ty),
            None => false,
        }
    }

    /// Names of the required members `ty` lacks, in protocol order.
    pub fn missing_members(&self, ty: TypeHandle) -> Vec<&'a str> {
        let mut missing = Vec::new();
        if !self.has_result(ty) {
            missing.push(self.protocol.result.as_str());
        }
        if !self.has_continuation(ty) {
            missing.push(self.protocol.continuation.as_str());
        }
        if !self.has_completion(ty) {
            missing.push(self.protocol.completion.as_str());
        }
        missing
    }

    fn has_result(&self, ty: TypeHandle) -> bool {
        self.model
            .members_named(ty, &self.protocol.result)
            .iter()
            .any(|m| m.arity() == Some(0))
    }

    fn has_continuation(&self, ty: TypeHandle) -> bool {
        self.model
            .members_named(ty, &self.protocol.continuation)
            .iter()
            .any(|m| m.is_method())
    }

    fn has_completion(&self, ty: TypeHandle) -> bool {
        self.model
            .members_named(ty, &self.protocol.completion)
            .iter()
            .any(|m| m.is_property())
    }
}
