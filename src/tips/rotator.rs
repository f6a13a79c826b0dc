//! Non-repeating index rotation: every index of `[0, n)` once per cycle, reshuffled on
//! exhaustion.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returned by [`TipRotator::next`] before the first permutation exists.
pub const NOT_READY: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorState {
    Uninitialized,
    Ready { cursor: usize },
}

pub struct TipRotator<R = StdRng> {
    len: usize,
    order: Vec<usize>,
    state: RotatorState,
    rng: R,
}

impl TipRotator<StdRng> {
    /// Uninitialized rotator over `[0, len)`; call [`TipRotator::prime`] before use.
    pub fn new(len: usize) -> Self {
        Self::with_rng(len, StdRng::from_entropy())
    }

    /// Rotator that is ready immediately.
    pub fn shuffled(len: usize) -> Self {
        let mut r = Self::new(len);
        r.prime();
        r
    }
}

impl<R: Rng> TipRotator<R> {
    pub fn with_rng(len: usize, rng: R) -> Self {
        Self {
            len,
            order: Vec::with_capacity(len),
            state: RotatorState::Uninitialized,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self) -> RotatorState {
        self.state
    }

    /// Build the first permutation. No-op once ready.
    pub fn prime(&mut self) {
        if self.state == RotatorState::Uninitialized {
            self.order.clear();
            self.order.extend(0..self.len);
            self.reshuffle();
        }
    }

    /// Fisher-Yates over the owned buffer; resets the cursor.
    fn reshuffle(&mut self) {
        for i in (1..self.order.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            self.order.swap(i, j);
        }
        self.state = RotatorState::Ready { cursor: 0 };
    }

    /// Next index of the current cycle, or [`NOT_READY`] before priming or when empty.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i32 {
        self.next_index().map_or(NOT_READY, |i| i as i32)
    }

    pub fn next_index(&mut self) -> Option<usize> {
        let RotatorState::Ready { cursor } = self.state else {
            return None;
        };
        if self.order.is_empty() {
            return None;
        }
        let cursor = if cursor >= self.order.len() {
            self.reshuffle();
            0
        } else {
            cursor
        };
        self.state = RotatorState::Ready { cursor: cursor + 1 };
        Some(self.order[cursor])
    }
}
