// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ConformanceError;

/// A cancellation flag shared between a host and the checks it started.
///
/// Clones observe the same flag. Traversals poll it between nodes.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// `Err(Cancelled)` once [`CancellationToken::cancel`] has been called.
    pub fn check(&self) -> Result<(), ConformanceError> {
        if self.is_cancelled() {
            Err(ConformanceError::Cancelled)
        } else {
            Ok(())
        }
    }
}
