use amax_code::DistanceTable;

const WORD_BITS: usize = 64;

/// Greedy colouring upper bound on the largest code inside a frontier.
///
/// Candidates are packed first-fit into classes whose members are pairwise
/// too close, so any code uses at most one word per class. Each class keeps
/// the union of its members' table rows: a candidate joins a class iff it is
/// not in that union.
#[derive(Debug, Clone, Default)]
pub struct ColoringBound {
    masks: Vec<u64>,
}

impl ColoringBound {
    /// Creates an empty scratch buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of colour classes covering `candidates`.
    ///
    /// Stops as soon as `enough` classes exist; a return value `>= enough`
    /// therefore only means the bound cannot prune.
    pub fn classes(&mut self, table: &DistanceTable, candidates: &[usize], enough: usize) -> usize {
        let words = table.words_per_row();
        self.masks.clear();
        let mut classes = 0;
        for &vertex in candidates {
            let word = vertex / WORD_BITS;
            let bit = 1u64 << (vertex % WORD_BITS);
            let fits = (0..classes).find(|&c| self.masks[c * words + word] & bit == 0);
            let class = match fits {
                Some(class) => class,
                None => {
                    classes += 1;
                    if classes >= enough {
                        return classes;
                    }
                    self.masks.resize(classes * words, 0);
                    classes - 1
                }
            };
            let mask = &mut self.masks[class * words..(class + 1) * words];
            for (slot, row) in mask.iter_mut().zip(table.row(vertex)) {
                *slot |= row;
            }
        }
        classes
    }
}
