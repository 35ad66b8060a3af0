use tracing::trace;

use crate::frames::{FrameParams, FrameShape};

/// Input tuple a frame description is generated from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameKey {
    pub shape: FrameShape,
    pub params: FrameParams,
}

impl FrameKey {
    #[must_use]
    pub fn new(shape: FrameShape, params: FrameParams) -> Self {
        Self {
            shape,
            params: params.normalized(),
        }
    }
}

/// Single-slot memo of the last generated frame description.
///
/// Inputs change rarely and one at a time, so only the latest result is kept.
#[derive(Debug)]
pub struct FrameCache<T> {
    slot: Option<(FrameKey, T)>,
    hits: usize,
    misses: usize,
}

impl<T> Default for FrameCache<T> {
    fn default() -> Self {
        Self {
            slot: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<T> FrameCache<T> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, generating and storing it on a miss.
    pub fn get_or_generate<F>(&mut self, key: FrameKey, generate: F) -> &T
    where
        F: FnOnce(&FrameKey) -> T,
    {
        let entry = match self.slot.take() {
            Some((cached, value)) if cached == key => {
                self.hits += 1;
                trace!(shape = %key.shape, "frame cache hit");
                (cached, value)
            }
            _ => {
                self.misses += 1;
                trace!(shape = %key.shape, "frame cache miss");
                let value = generate(&key);
                (key, value)
            }
        };
        &self.slot.insert(entry).1
    }

    /// The key of the cached value, if any.
    #[must_use]
    pub fn key(&self) -> Option<&FrameKey> {
        self.slot.as_ref().map(|(k, _)| k)
    }

    /// Drops the cached value.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> usize {
        self.misses
    }
}
