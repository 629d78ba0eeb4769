use crate::types::Highlight;

use super::StepSort;

/// Top-down merge sort driven by an explicit task stack.
///
/// Yields `{k}` once per element written back by a merge. Splitting
/// ranges produces no visible work and never yields.
#[derive(Debug)]
pub struct MergeSort {
    tasks: Vec<Task>,
    active: Option<Merge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Sort `l..=r`.
    Sort { l: usize, r: usize },
    /// Merge the sorted halves `l..=m` and `m+1..=r`.
    Merge { l: usize, m: usize, r: usize },
}

/// An in-flight merge. Owns copies of both halves until it finishes.
#[derive(Debug)]
struct Merge {
    left: Vec<u32>,
    right: Vec<u32>,
    li: usize,
    ri: usize,
    k: usize,
}

impl Merge {
    fn new(bars: &[u32], l: usize, m: usize, r: usize) -> Self {
        Merge {
            left: bars[l..=m].to_vec(),
            right: bars[m + 1..=r].to_vec(),
            li: 0,
            ri: 0,
            k: l,
        }
    }

    fn is_done(&self) -> bool {
        self.li == self.left.len() && self.ri == self.right.len()
    }

    /// Write the next element in merged order. Returns the written index.
    fn write_next(&mut self, bars: &mut [u32]) -> usize {
        let take_left = match (self.left.get(self.li), self.right.get(self.ri)) {
            (Some(a), Some(b)) => a <= b,
            (Some(_), None) => true,
            _ => false,
        };
        bars[self.k] = if take_left {
            self.li += 1;
            self.left[self.li - 1]
        } else {
            self.ri += 1;
            self.right[self.ri - 1]
        };
        self.k += 1;
        self.k - 1
    }

    /// Dump whatever is still buffered into the unwritten tail.
    fn flush(&mut self, bars: &mut [u32]) {
        for &v in self.left[self.li..].iter().chain(&self.right[self.ri..]) {
            bars[self.k] = v;
            self.k += 1;
        }
        self.li = self.left.len();
        self.ri = self.right.len();
    }
}

impl MergeSort {
    pub fn new(len: usize) -> Self {
        let tasks = if len > 1 {
            vec![Task::Sort { l: 0, r: len - 1 }]
        } else {
            Vec::new()
        };
        MergeSort {
            tasks,
            active: None,
        }
    }
}

impl StepSort for MergeSort {
    fn advance(&mut self, bars: &mut [u32]) -> Option<Highlight> {
        loop {
            if let Some(merge) = &mut self.active {
                if !merge.is_done() {
                    let k = merge.write_next(bars);
                    return Some(Highlight::one(k));
                }
                self.active = None;
            }

            match self.tasks.pop()? {
                Task::Sort { l, r } => {
                    if l < r {
                        let m = l + (r - l) / 2;
                        // LIFO: left half runs first, merge runs last.
                        self.tasks.push(Task::Merge { l, m, r });
                        self.tasks.push(Task::Sort { l: m + 1, r });
                        self.tasks.push(Task::Sort { l, r: m });
                    }
                }
                Task::Merge { l, m, r } => {
                    self.active = Some(Merge::new(bars, l, m, r));
                }
            }
        }
    }

    fn release(&mut self, bars: &mut [u32]) {
        if let Some(merge) = &mut self.active {
            merge.flush(bars);
        }
        self.active = None;
        self.tasks.clear();
    }
}
