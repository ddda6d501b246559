// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Structural awaitability checking.
//!
//! A type is awaitable when it has a zero-argument `GetAwaiter` method, or
//! when a visible extension method named `GetAwaiter` targets it, and the
//! returned awaiter exposes `GetResult()`, `OnCompleted(..)` and an
//! `IsCompleted` property. No nominal interface is involved.
//!
//! Results are memoized per [`CompilationContext`]; a new program snapshot
//! needs a new context.

mod cache;
mod cancel;
mod conformance;
mod context;
mod error;
mod protocol;
mod scan;
mod shape;

#[cfg(test)]
mod test_support;

pub use cache::ConformanceCache;
pub use cancel::CancellationToken;
pub use conformance::AwaitableChecker;
pub use context::CompilationContext;
pub use error::ConformanceError;
pub use protocol::{AwaitProtocol, GET_AWAITER, GET_RESULT, IS_COMPLETED, ON_COMPLETED};
pub use scan::{ExtensionScan, ExtensionScanner};
pub use shape::AwaiterShape;
