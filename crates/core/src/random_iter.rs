//! Seeded, repeatable draws from a fixed list.

use crate::error::TilingError;
use crate::prng::Mulberry32;

/// A stateful chooser that picks one element of a fixed list per draw.
///
/// Each draw consumes exactly one value from the underlying [`Mulberry32`]
/// stream. The list is never reordered or shrunk, so the same seed over the
/// same list always yields the same sequence of picks.
#[derive(Debug, Clone)]
pub struct RandomIterator<T> {
    items: Vec<T>,
    stream: Mulberry32,
}

impl<T> RandomIterator<T> {
    /// Creates an iterator over `items` driven by a stream keyed by `seed`.
    ///
    /// Returns `TilingError::EmptyChoices` if `items` is empty.
    pub fn new(items: Vec<T>, seed: u32) -> Result<Self, TilingError> {
        Self::with_stream(items, Mulberry32::new(seed))
    }

    /// Creates an iterator over `items` driven by an existing stream.
    ///
    /// Returns `TilingError::EmptyChoices` if `items` is empty.
    pub fn with_stream(items: Vec<T>, stream: Mulberry32) -> Result<Self, TilingError> {
        if items.is_empty() {
            return Err(TilingError::EmptyChoices);
        }
        Ok(Self { items, stream })
    }

    /// Draws the next element.
    #[doc(alias = "next")]
    pub fn draw(&mut self) -> &T {
        let index = self.stream.next_index(self.items.len());
        &self.items[index]
    }

    /// The candidate list, in its original order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of candidates. Always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Infinite: `next` never returns `None`.
impl<T: Clone> Iterator for RandomIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.draw().clone())
    }
}
