use crate::types::Highlight;

use super::StepSort;

/// Heapsort over a max-heap.
///
/// Sift-down is iterative: each swap is one step yielding
/// `{node, largest}`; a sift that finds the heap property already holds
/// ends without a step. Extraction yields `{0, last}` per root swap.
#[derive(Debug)]
pub struct HeapSort {
    phase: Phase,
    /// In-flight sift-down: (heap length, node).
    sift: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Heapify nodes `remaining - 1` down to 0.
    Build { remaining: usize },
    /// Swap the root with `end`, then sift within `0..end`.
    Extract { end: usize },
}

impl HeapSort {
    pub fn new(len: usize) -> Self {
        HeapSort {
            phase: Phase::Build { remaining: len / 2 },
            sift: None,
        }
    }
}

/// Index of the largest of `node` and its children within `0..len`.
fn largest_of(bars: &[u32], len: usize, node: usize) -> usize {
    let mut largest = node;
    let left = 2 * node + 1;
    let right = left + 1;
    if left < len && bars[left] > bars[largest] {
        largest = left;
    }
    if right < len && bars[right] > bars[largest] {
        largest = right;
    }
    largest
}

impl StepSort for HeapSort {
    fn advance(&mut self, bars: &mut [u32]) -> Option<Highlight> {
        loop {
            if let Some((len, node)) = self.sift {
                let largest = largest_of(bars, len, node);
                if largest != node {
                    bars.swap(node, largest);
                    self.sift = Some((len, largest));
                    return Some(Highlight::pair(node, largest));
                }
                self.sift = None;
            }

            match self.phase {
                Phase::Build { remaining: 0 } => {
                    self.phase = Phase::Extract {
                        end: bars.len().saturating_sub(1),
                    };
                }
                Phase::Build { remaining } => {
                    let node = remaining - 1;
                    self.phase = Phase::Build { remaining: node };
                    self.sift = Some((bars.len(), node));
                }
                Phase::Extract { end: 0 } => return None,
                Phase::Extract { end } => {
                    bars.swap(0, end);
                    self.phase = Phase::Extract { end: end - 1 };
                    self.sift = Some((end, 0));
                    return Some(Highlight::pair(0, end));
                }
            }
        }
    }

    fn release(&mut self, _bars: &mut [u32]) {
        self.sift = None;
        self.phase = Phase::Extract { end: 0 };
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::trace;
    use crate::types::{Algorithm, Highlight};

    #[test]
    fn ascending_pair() {
        let mut bars = [1, 2];
        let steps = trace(Algorithm::Heap, &mut bars);
        // Build swaps 2 up, extraction swaps it back to the end.
        assert_eq!(steps, vec![Highlight::pair(0, 1), Highlight::pair(0, 1)]);
        assert_eq!(bars, [1, 2]);
    }

    #[test]
    fn already_a_heap_skips_build_steps() {
        let mut bars = [3, 2, 1];
        let steps = trace(Algorithm::Heap, &mut bars);
        // No build swaps; first step is the root extraction.
        assert_eq!(steps[0], Highlight::pair(0, 2));
        assert_eq!(bars, [1, 2, 3]);
    }

    #[test]
    fn sift_continues_down_the_tree() {
        let mut bars = [1, 5, 4, 3, 2];
        let steps = trace(Algorithm::Heap, &mut bars);
        // Node 1 (5) already beats its children; node 0 sifts 1 down twice.
        assert_eq!(steps[0], Highlight::pair(0, 1));
        assert_eq!(steps[1], Highlight::pair(1, 3));
        assert_eq!(bars, [1, 2, 3, 4, 5]);
    }
}
