//! The lazy generator of `0, 1, 2, ...`.

use eqint_core::Eqint;
use std::iter::FusedIterator;
use tracing::trace;

/// Returns a generator for the first `count` naturals, `0..count`.
///
/// Each call starts over from zero, so calling it twice yields equal
/// sequences.
#[must_use]
pub fn naturals(count: usize) -> Naturals {
    Naturals::new(count)
}

/// Iterator over the naturals `0..count`, built inductively.
///
/// The generator owns the buffer of every value it has produced. The next
/// value is constructed from that whole buffer, whose length is the running
/// index, and is then appended to it. Values already handed out are copies
/// and never change afterwards.
#[derive(Clone, Debug)]
pub struct Naturals {
    produced: Vec<Eqint>,
    count: usize,
}

impl Naturals {
    /// Creates a generator that stops after `count` values.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            produced: Vec::new(),
            count,
        }
    }

    /// Returns every value produced so far, in order.
    #[must_use]
    pub fn produced(&self) -> &[Eqint] {
        &self.produced
    }

    /// Returns how many values are still to come.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.count - self.produced.len()
    }
}

impl Iterator for Naturals {
    type Item = Eqint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.produced.len() >= self.count {
            return None;
        }

        let next = Eqint::new(self.produced.as_slice());
        trace!(magnitude = %next, "constructed natural from its predecessors");
        self.produced.push(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Naturals {}

impl FusedIterator for Naturals {}
