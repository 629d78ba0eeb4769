use crate::types::Highlight;

use super::StepSort;

/// Insertion sort: lift `bars[i]` out, shift larger neighbours right one
/// at a time, drop the key into the gap.
///
/// Yields `{i, j}` per shift and `{j + 1, i}` when the key lands.
#[derive(Debug)]
pub struct InsertionSort {
    i: usize,
    phase: Phase,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Next step lifts `bars[i]`.
    Pick,
    /// `key` is held outside the slice; `hole` is the slot it will fill.
    Shift { key: u32, hole: usize },
}

impl InsertionSort {
    pub fn new() -> Self {
        InsertionSort {
            i: 1,
            phase: Phase::Pick,
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSort for InsertionSort {
    fn advance(&mut self, bars: &mut [u32]) -> Option<Highlight> {
        let (key, hole) = match self.phase {
            Phase::Pick => {
                if self.i >= bars.len() {
                    return None;
                }
                (bars[self.i], self.i)
            }
            Phase::Shift { key, hole } => (key, hole),
        };

        if hole > 0 && bars[hole - 1] > key {
            let j = hole - 1;
            bars[hole] = bars[j];
            self.phase = Phase::Shift { key, hole: j };
            return Some(Highlight::pair(self.i, j));
        }

        bars[hole] = key;
        let hl = Highlight::pair(hole, self.i);
        self.i += 1;
        self.phase = Phase::Pick;
        Some(hl)
    }

    fn release(&mut self, bars: &mut [u32]) {
        if let Phase::Shift { key, hole } = self.phase {
            bars[hole] = key;
        }
        self.phase = Phase::Pick;
        self.i = bars.len();
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::trace;
    use super::super::Sorter;
    use crate::types::{Algorithm, Highlight};

    #[test]
    fn five_three_four_one_two() {
        let mut bars = [5, 3, 4, 1, 2];
        let pairs: Vec<(usize, usize)> = trace(Algorithm::Insertion, &mut bars)
            .into_iter()
            .map(|hl| (hl.primary.unwrap(), hl.secondary.unwrap()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (1, 0),
                (0, 1),
                (2, 1),
                (1, 2),
                (3, 2),
                (3, 1),
                (3, 0),
                (0, 3),
                (4, 3),
                (4, 2),
                (4, 1),
                (1, 4),
            ]
        );
        assert_eq!(bars, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_input_only_places_keys() {
        let mut bars = [1, 2, 3, 4];
        let steps = trace(Algorithm::Insertion, &mut bars);
        assert_eq!(
            steps,
            vec![
                Highlight::pair(1, 1),
                Highlight::pair(2, 2),
                Highlight::pair(3, 3)
            ]
        );
    }

    #[test]
    fn reversed_input_shifts_every_pair() {
        let n = 8usize;
        let mut bars: Vec<u32> = (0..n as u32).rev().collect();
        let steps = trace(Algorithm::Insertion, &mut bars);
        // n(n-1)/2 shifts plus n-1 placements.
        assert_eq!(steps.len(), n * (n - 1) / 2 + (n - 1));
    }

    #[test]
    fn cancel_mid_shift_restores_key() {
        let mut bars = [5, 3, 4, 1, 2];
        let mut sorter = Sorter::new(Algorithm::Insertion, bars.len());
        sorter.step(&mut bars);
        // Key 3 is lifted, 5 has been shifted into its slot.
        assert_eq!(bars, [5, 5, 4, 1, 2]);
        sorter.cancel(&mut bars);
        assert_eq!(bars, [3, 5, 4, 1, 2]);
    }
}
