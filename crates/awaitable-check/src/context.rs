// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! One program snapshot and the cache scoped to it.

use std::fmt;
use std::sync::Arc;

use awaitable_symbols::{ModuleId, SemanticModel};

use crate::cache::ConformanceCache;
use crate::protocol::AwaitProtocol;

/// A compilation snapshot: the semantic model, the modules it references in
/// order, the await protocol, and the conformance cache that belongs to it.
///
/// Each context owns its cache, so results never leak between snapshots or
/// between protocols.
/// Share a context across worker threads by reference.
pub struct CompilationContext {
    model: Arc<dyn SemanticModel>,
    references: Vec<ModuleId>,
    protocol: AwaitProtocol,
    cache: ConformanceCache,
}

impl CompilationContext {
    /// A context matching the default `GetAwaiter` protocol.
    pub fn new(model: Arc<dyn SemanticModel>, references: Vec<ModuleId>) -> Self {
        Self::with_protocol(model, references, AwaitProtocol::default())
    }

    pub fn with_protocol(
        model: Arc<dyn SemanticModel>,
        references: Vec<ModuleId>,
        protocol: AwaitProtocol,
    ) -> Self {
        Self {
            model,
            references,
            protocol,
            cache: ConformanceCache::new(),
        }
    }

    pub fn model(&self) -> &dyn SemanticModel {
        self.model.as_ref()
    }

    /// Shared handle to the model, for building a context with another cache.
    pub fn model_arc(&self) -> Arc<dyn SemanticModel> {
        Arc::clone(&self.model)
    }

    /// Referenced dependency modules, in reference order.
    pub fn references(&self) -> &[ModuleId] {
        &self.references
    }

    pub fn protocol(&self) -> &AwaitProtocol {
        &self.protocol
    }

    pub fn cache(&self) -> &ConformanceCache {
        &self.cache
    }
}

impl fmt::Debug for CompilationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilationContext")
            .field("references", &self.references)
            .field("entry_point", &self.protocol.entry_point)
            .field("cached", &self.cache.len())
            .finish()
    }
}
