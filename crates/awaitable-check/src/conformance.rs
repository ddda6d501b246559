// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Awaitability decisions.
//!
//! A type is awaitable when either
//! - it declares a zero-argument entry point returning an awaiter, or
//! - an extension entry point targets it, declared in the program itself or
//!   publicly in any referenced module.

use awaitable_symbols::TypeHandle;
use rustc_hash::FxHashSet;

use crate::cancel::CancellationToken;
use crate::context::CompilationContext;
use crate::error::ConformanceError;
use crate::scan::{extension_target, ExtensionScanner};
use crate::shape::AwaiterShape;

/// Answers "is this type awaitable under this compilation?".
///
/// Stateless: the protocol and the memo table both live in the
/// [`CompilationContext`], so one checker can serve any number of contexts
/// and a cached answer always belongs to the protocol that produced it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwaitableChecker;

impl AwaitableChecker {
    pub fn new() -> Self {
        Self
    }

    /// Whether values of `ty` can be awaited.
    ///
    /// An absent type is never awaitable and is not cached. Results are memoized
    /// in `ctx`; a cancelled check returns `Err(Cancelled)` and caches nothing.
    #[tracing::instrument(level = "debug", skip_all, fields(ty = ?ty))]
    pub fn is_awaitable(
        &self,
        ty: Option<TypeHandle>,
        ctx: &CompilationContext,
        cancel: &CancellationToken,
    ) -> Result<bool, ConformanceError> {
        let Some(ty) = ty else {
            return Ok(false);
        };
        ctx.cache().get_or_compute(ty, || self.compute(ty, ctx, cancel))
    }

    fn compute(
        &self,
        ty: TypeHandle,
        ctx: &CompilationContext,
        cancel: &CancellationToken,
    ) -> Result<bool, ConformanceError> {
        cancel.check()?;
        let model = ctx.model();

        if self.has_intrinsic_awaiter(ty, ctx) {
            tracing::debug!(name = ?model.type_name(ty), "awaitable through its own entry point");
            return Ok(true);
        }

        let awaitable = self.extension_targets(ctx, cancel)?.contains(&ty);
        tracing::debug!(name = ?model.type_name(ty), awaitable, "extension conformance resolved");
        Ok(awaitable)
    }

    /// A zero-argument entry point declared on `ty` whose return type is an awaiter.
    fn has_intrinsic_awaiter(&self, ty: TypeHandle, ctx: &CompilationContext) -> bool {
        let (model, protocol) = (ctx.model(), ctx.protocol());
        let shape = AwaiterShape::new(model, protocol);
        model
            .members_named(ty, &protocol.entry_point)
            .into_iter()
            .filter(|m| m.is_method() && m.arity() == Some(0))
            .any(|m| {
                let conforms = shape.conforms(m.return_type());
                if !conforms {
                    if let Some(ret) = m.return_type() {
                        tracing::trace!(
                            awaiter = ?model.type_name(ret),
                            missing = ?shape.missing_members(ret),
                            "entry point return type is not an awaiter"
                        );
                    }
                }
                conforms
            })
    }

    /// Every type made awaitable by an extension entry point visible to `ctx`.
    ///
    /// Program-local extension methods count regardless of accessibility; methods
    /// in referenced modules must be public and sit in public containers.
    pub fn extension_targets(
        &self,
        ctx: &CompilationContext,
        cancel: &CancellationToken,
    ) -> Result<FxHashSet<TypeHandle>, ConformanceError> {
        let (model, protocol) = (ctx.model(), ctx.protocol());
        let shape = AwaiterShape::new(model, protocol);

        let mut targets: FxHashSet<TypeHandle> = model
            .local_members_named(&protocol.entry_point)
            .into_iter()
            .filter_map(|m| extension_target(&shape, m))
            .collect();

        let scanner = ExtensionScanner::new(model, protocol);
        for &module in ctx.references() {
            for target in scanner.awaitable_types_in(module, cancel)? {
                targets.insert(target?);
            }
        }
        Ok(targets)
    }
}
