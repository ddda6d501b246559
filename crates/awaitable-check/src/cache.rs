// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Per-compilation conformance memo table.
//!
//! Lookups and inserts go through a `DashMap`, so concurrent readers never see
//! a torn entry. No lock is held while a result is computed: two callers that
//! miss on the same type both compute it and the later insert wins, which is
//! harmless because the computation is pure.

use awaitable_symbols::TypeHandle;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

/// Maps a type to whether it is awaitable. Entries are never evicted.
#[derive(Debug, Default)]
pub struct ConformanceCache {
    entries: DashMap<TypeHandle, bool, FxBuildHasher>,
}

impl ConformanceCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn get(&self, ty: TypeHandle) -> Option<bool> {
        self.entries.get(&ty).map(|entry| *entry)
    }

    /// Return the cached result for `ty`, or run `compute` and store its result.
    ///
    /// Errors from `compute` are returned as-is and leave the cache untouched.
    pub fn get_or_compute<E>(
        &self,
        ty: TypeHandle,
        compute: impl FnOnce() -> Result<bool, E>,
    ) -> Result<bool, E> {
        if let Some(hit) = self.get(ty) {
            return Ok(hit);
        }
        let value = compute()?;
        self.entries.insert(ty, value);
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
