use crate::types::Highlight;

use super::StepSort;

/// Selection sort: scan for the minimum of the unsorted tail, then swap it
/// into place.
///
/// Yields `{i, j, min}` per scanned element and `{i, min}` per swap.
#[derive(Debug)]
pub struct SelectionSort {
    i: usize,
    j: usize,
    min: usize,
}

impl SelectionSort {
    pub fn new() -> Self {
        SelectionSort { i: 0, j: 1, min: 0 }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSort for SelectionSort {
    fn advance(&mut self, bars: &mut [u32]) -> Option<Highlight> {
        let n = bars.len();
        if self.i + 1 >= n {
            return None;
        }

        if self.j < n {
            if bars[self.j] < bars[self.min] {
                self.min = self.j;
            }
            let hl = Highlight::triple(self.i, self.j, self.min);
            self.j += 1;
            return Some(hl);
        }

        bars.swap(self.i, self.min);
        let hl = Highlight::pair(self.i, self.min);
        self.i += 1;
        self.min = self.i;
        self.j = self.i + 1;
        Some(hl)
    }
}
