// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Conformance checking errors.
//!
//! Absence is never an error: unknown types, memberless types and empty
//! reference lists all produce `false`. These variants cover cancellation
//! and broken caller contracts only.

use awaitable_symbols::ModuleId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConformanceError {
    #[error("conformance check cancelled")]
    Cancelled,

    #[error("module {0:?} is not part of the semantic model")]
    UnknownModule(ModuleId),

    #[error("module `{module}` has no global namespace")]
    MissingGlobalNamespace { module: String },

    #[error("invalid await protocol configuration: {0}")]
    InvalidProtocol(serde_json::Error),
}

impl ConformanceError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ConformanceError::Cancelled)
    }
}
