// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Symbol graph error types.

use thiserror::Error;

use crate::handle::{ModuleId, NamespaceId, TypeHandle};

/// Errors raised while building or loading a [`crate::SymbolGraph`].
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("unknown type: {0:?}")]
    UnknownType(TypeHandle),

    #[error("unknown namespace: {0:?}")]
    UnknownNamespace(NamespaceId),

    #[error("unknown module: {0:?}")]
    UnknownModule(ModuleId),

    #[error("invalid symbol snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
