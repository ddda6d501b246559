// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Member names that make up the awaitable pattern.

use serde::{Deserialize, Serialize};

use crate::error::ConformanceError;

/// Entry point that produces an awaiter.
pub const GET_AWAITER: &str = "GetAwaiter";
/// Zero-argument result accessor on the awaiter.
pub const GET_RESULT: &str = "GetResult";
/// Continuation registration method on the awaiter.
pub const ON_COMPLETED: &str = "OnCompleted";
/// Completion status property on the awaiter.
pub const IS_COMPLETED: &str = "IsCompleted";

/// Names the checker matches against. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwaitProtocol {
    pub entry_point: String,
    pub result: String,
    pub continuation: String,
    pub completion: String,
}

impl Default for AwaitProtocol {
    fn default() -> Self {
        Self {
            entry_point: GET_AWAITER.to_string(),
            result: GET_RESULT.to_string(),
            continuation: ON_COMPLETED.to_string(),
            completion: IS_COMPLETED.to_string(),
        }
    }
}

impl AwaitProtocol {
    /// Parse a protocol from JSON. Omitted fields keep their default names.
    pub fn from_json(json: &str) -> Result<Self, ConformanceError> {
        serde_json::from_str(json).map_err(ConformanceError::InvalidProtocol)
    }
}
