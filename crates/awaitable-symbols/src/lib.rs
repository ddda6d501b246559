// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Read-only symbol model consumed by the awaitable conformance checker.
//!
//! A compiler front end exposes its semantic model through [`SemanticModel`].
//! [`SymbolGraph`] is an in-memory implementation used by tests and by hosts
//! that load snapshots from JSON.

mod error;
mod graph;
mod handle;
mod member;
mod model;

pub use error::SymbolError;
pub use graph::SymbolGraph;
pub use handle::{ModuleId, NamespaceId, ScopeNode, TypeHandle};
pub use member::{Accessibility, Member, MemberKind};
pub use model::{ModuleInfo, SemanticModel};
