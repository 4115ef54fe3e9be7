//! Scripted index generators for quote draws.

use std::collections::VecDeque;

use talktoswami_core::rng::DeterministicRng;

/// Always draws the first category and its first quote.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Replays a fixed list of indices, one per draw. A quote draw consumes two:
/// the category index, then the quote index within that category.
#[derive(Debug)]
pub struct SequenceRng {
    indices: VecDeque<usize>,
}

impl SequenceRng {
    /// Creates a generator that replays `indices` in order.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices: indices.into(),
        }
    }
}

impl DeterministicRng for SequenceRng {
    /// # Panics
    ///
    /// Panics when the script is exhausted or names an index outside
    /// `[0, len)`, both of which are bugs in the test.
    fn next_index(&mut self, len: usize) -> usize {
        let Some(index) = self.indices.pop_front() else {
            panic!("SequenceRng ran out of scripted indices");
        };
        assert!(index < len, "scripted index {index} out of range for {len} items");
        index
    }
}
