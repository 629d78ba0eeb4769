//! Array store: the bar sequence being sorted.
//!
//! Length is fixed when the store is created. Sorters get a mutable
//! slice (they can swap and write but not grow or shrink), and a refill
//! must supply exactly as many values as are already held.

use crate::generator::ArrayGenerator;

/// Fixed-length sequence of bar heights.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BarSequence {
    values: Vec<u32>,
}

impl BarSequence {
    pub fn new(values: Vec<u32>) -> Self {
        BarSequence { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Mutable view for sorters. Slices cannot change length.
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.values
    }

    /// Replace the contents with a fresh draw from `generator`.
    ///
    /// An empty store adopts the generator's length (first generation);
    /// afterwards the generator must match the existing length.
    pub fn refill(&mut self, generator: &mut ArrayGenerator) {
        debug_assert!(
            self.values.is_empty() || generator.len() == self.values.len(),
            "bar count is fixed after the first generation"
        );
        self.values = generator.generate();
    }

    /// True when heights are non-decreasing.
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Largest height, used to scale the chart.
    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}
