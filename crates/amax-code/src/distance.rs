use amax_core::{AmaxError, ErrorInfo};
use tracing::debug;

use crate::space::{Symbol, VectorSpace};

const WORD_BITS: usize = 64;

/// Number of coordinates at which `a` and `b` differ.
pub fn hamming(a: &[Symbol], b: &[Symbol]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

fn hamming_at_least(a: &[Symbol], b: &[Symbol], bound: usize) -> bool {
    let mut remaining = a.len();
    let mut distance = 0;
    for (x, y) in a.iter().zip(b) {
        remaining -= 1;
        if x != y {
            distance += 1;
            if distance >= bound {
                return true;
            }
        } else if distance + remaining < bound {
            return false;
        }
    }
    distance >= bound
}

/// Square bit matrix: `satisfies(i, j)` iff vectors `i` and `j` are at
/// Hamming distance at least `d`.
///
/// Symmetric with an all-false diagonal. Rows are packed into `u64` words so
/// a row doubles as a bitset over candidate indices.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    size: usize,
    words_per_row: usize,
    min_distance: usize,
    bits: Vec<u64>,
}

impl DistanceTable {
    /// Builds the table for every pair of vectors in `space`.
    pub fn build(space: &VectorSpace, min_distance: usize) -> Result<Self, AmaxError> {
        if min_distance == 0 || min_distance > space.length() {
            return Err(AmaxError::Parameter(
                ErrorInfo::new("distance-out-of-range", "minimum distance must satisfy 1 <= d <= n")
                    .with_context("d", min_distance)
                    .with_context("n", space.length()),
            ));
        }
        let size = space.len();
        let words_per_row = size.div_ceil(WORD_BITS);
        let total = size.checked_mul(words_per_row).ok_or_else(|| {
            AmaxError::Resource(
                ErrorInfo::new("table-too-large", "distance table size overflows")
                    .with_context("vectors", size),
            )
        })?;
        let mut bits = Vec::new();
        bits.try_reserve_exact(total)?;
        bits.resize(total, 0);

        let mut table = Self {
            size,
            words_per_row,
            min_distance,
            bits,
        };
        let mut satisfied_pairs = 0usize;
        for i in 0..size {
            let weight_i = space.weight(i);
            let vector_i = space.vector(i);
            for j in (i + 1)..size {
                // Weight gap alone already bounds the distance from below.
                let far = weight_i.abs_diff(space.weight(j)) >= min_distance
                    || hamming_at_least(vector_i, space.vector(j), min_distance);
                if far {
                    table.set(i, j);
                    table.set(j, i);
                    satisfied_pairs += 1;
                }
            }
        }
        debug!(
            vectors = size,
            d = min_distance,
            satisfied_pairs,
            bytes = total * 8,
            "built distance table"
        );
        Ok(table)
    }

    fn set(&mut self, i: usize, j: usize) {
        self.bits[i * self.words_per_row + j / WORD_BITS] |= 1u64 << (j % WORD_BITS);
    }

    /// True iff vectors `i` and `j` are at distance at least `d`.
    #[inline]
    pub fn satisfies(&self, i: usize, j: usize) -> bool {
        (self.bits[i * self.words_per_row + j / WORD_BITS] >> (j % WORD_BITS)) & 1 == 1
    }

    /// Packed row for vector `i`.
    pub fn row(&self, i: usize) -> &[u64] {
        let start = i * self.words_per_row;
        &self.bits[start..start + self.words_per_row]
    }

    /// Number of vectors far enough from `i`.
    pub fn row_count(&self, i: usize) -> usize {
        self.row(i).iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.size
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// `u64` words per packed row.
    pub fn words_per_row(&self) -> usize {
        self.words_per_row
    }

    /// The distance threshold `d`.
    pub fn min_distance(&self) -> usize {
        self.min_distance
    }
}
