use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use super::itf::Interleaved2of5;
use crate::core::BarcodePayload;

/// Default number of encoded barcodes kept by [`BarcodeCache::default`].
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => unreachable!(),
};

/// Encoded barcodes keyed by payload content, bounded by least-recent use.
///
/// Encoding is deterministic, so a cached entry is always identical to a
/// fresh encoding of the same payload.
#[derive(Debug)]
pub struct BarcodeCache {
    entries: LruCache<BarcodePayload, Arc<Interleaved2of5>>,
}

impl BarcodeCache {
    /// Create a cache holding at most `capacity` barcodes.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Return the cached barcode for `payload`, encoding it on first use.
    ///
    /// Inserting into a full cache evicts the least recently used entry.
    pub fn get_or_encode(&mut self, payload: &BarcodePayload) -> Arc<Interleaved2of5> {
        if let Some(hit) = self.entries.get(payload) {
            return Arc::clone(hit);
        }
        tracing::trace!(digits = payload.len(), "encoding barcode");
        let encoded = Arc::new(Interleaved2of5::encode(payload));
        self.entries.put(payload.clone(), Arc::clone(&encoded));
        encoded
    }

    pub fn contains(&self, payload: &BarcodePayload) -> bool {
        self.entries.contains(payload)
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.entries.cap()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for BarcodeCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
