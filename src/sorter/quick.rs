use crate::types::Highlight;

use super::StepSort;

/// Quicksort with a Lomuto partition (pivot = last element of the range).
///
/// Pending ranges live on an explicit stack; the left sub-range is
/// always finished before the right one. Yields `{i, j, high}` for each
/// element moved below the boundary and `{i + 1, high}` when the pivot
/// lands.
#[derive(Debug)]
pub struct QuickSort {
    ranges: Vec<(usize, usize)>,
    active: Option<Partition>,
}

/// An in-flight partition of `low..=high`.
#[derive(Debug)]
struct Partition {
    low: usize,
    high: usize,
    pivot: u32,
    /// Next slot of the "less than pivot" prefix.
    store: usize,
    /// Scan cursor.
    j: usize,
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        let ranges = if len > 1 { vec![(0, len - 1)] } else { Vec::new() };
        QuickSort {
            ranges,
            active: None,
        }
    }

    fn push_range(&mut self, low: usize, high: usize) {
        if low < high {
            self.ranges.push((low, high));
        }
    }
}

impl StepSort for QuickSort {
    fn advance(&mut self, bars: &mut [u32]) -> Option<Highlight> {
        loop {
            if let Some(p) = &mut self.active {
                while p.j < p.high {
                    let j = p.j;
                    p.j += 1;
                    if bars[j] < p.pivot {
                        let i = p.store;
                        bars.swap(i, j);
                        p.store += 1;
                        return Some(Highlight::triple(i, j, p.high));
                    }
                }

                let (low, pi, high) = (p.low, p.store, p.high);
                bars.swap(pi, high);
                self.active = None;
                // Right first so the left range is popped next.
                self.push_range(pi + 1, high);
                if pi > low {
                    self.push_range(low, pi - 1);
                }
                return Some(Highlight::pair(pi, high));
            }

            let (low, high) = self.ranges.pop()?;
            self.active = Some(Partition {
                low,
                high,
                pivot: bars[high],
                store: low,
                j: low,
            });
        }
    }

    fn release(&mut self, _bars: &mut [u32]) {
        self.active = None;
        self.ranges.clear();
    }
}
