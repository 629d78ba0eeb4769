use crate::types::Highlight;

use super::StepSort;

/// Bubble sort with early exit after a pass without swaps.
///
/// Yields `{j, j + 1}` on every comparison, swapped or not.
#[derive(Debug)]
pub struct BubbleSort {
    pass: usize,
    j: usize,
    swapped: bool,
    done: bool,
}

impl BubbleSort {
    pub fn new() -> Self {
        BubbleSort {
            pass: 0,
            j: 0,
            swapped: false,
            done: false,
        }
    }
}

impl Default for BubbleSort {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSort for BubbleSort {
    fn advance(&mut self, bars: &mut [u32]) -> Option<Highlight> {
        let n = bars.len();
        loop {
            if self.done || self.pass + 1 >= n {
                self.done = true;
                return None;
            }

            if self.j + 1 < n - self.pass {
                let j = self.j;
                if bars[j] > bars[j + 1] {
                    bars.swap(j, j + 1);
                    self.swapped = true;
                }
                self.j += 1;
                return Some(Highlight::pair(j, j + 1));
            }

            // End of pass.
            if !self.swapped {
                self.done = true;
                return None;
            }
            self.pass += 1;
            self.j = 0;
            self.swapped = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::trace;
    use crate::types::{Algorithm, Highlight};

    #[test]
    fn sorted_input_exits_after_first_pass() {
        let n = 12usize;
        let mut bars: Vec<u32> = (0..n as u32).collect();
        let steps = trace(Algorithm::Bubble, &mut bars);
        assert_eq!(steps.len(), n - 1);
        assert_eq!(steps[0], Highlight::pair(0, 1));
        assert_eq!(steps[n - 2], Highlight::pair(n - 2, n - 1));
    }

    #[test]
    fn reversed_input_runs_every_pass() {
        let n = 9usize;
        let mut bars: Vec<u32> = (0..n as u32).rev().collect();
        let steps = trace(Algorithm::Bubble, &mut bars);
        assert_eq!(steps.len(), n * (n - 1) / 2);
        assert_eq!(bars, (0..n as u32).collect::<Vec<_>>());
    }

    #[test]
    fn two_elements() {
        let mut bars = [2, 1];
        let steps = trace(Algorithm::Bubble, &mut bars);
        assert_eq!(steps, vec![Highlight::pair(0, 1)]);
        assert_eq!(bars, [1, 2]);
    }
}
