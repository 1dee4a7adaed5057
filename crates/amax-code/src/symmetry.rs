use crate::space::VectorSpace;

/// Per-vector flag: is the leading coordinate nonzero?
///
/// Only consulted by the opt-in leading-coordinate cut of the decision search.
#[derive(Debug, Clone)]
pub struct SymmetryFilter {
    leading_nonzero: Vec<bool>,
}

impl SymmetryFilter {
    /// Precomputes the flag for every vector in `space`.
    pub fn build(space: &VectorSpace) -> Self {
        Self {
            leading_nonzero: space.iter().map(|vector| vector[0] != 0).collect(),
        }
    }

    /// True iff the first coordinate of vector `index` is nonzero.
    #[inline]
    pub fn leading_nonzero(&self, index: usize) -> bool {
        self.leading_nonzero[index]
    }

    /// Number of vectors with a nonzero leading coordinate.
    pub fn count(&self) -> usize {
        self.leading_nonzero.iter().filter(|&&flag| flag).count()
    }

    /// Number of vectors covered.
    pub fn len(&self) -> usize {
        self.leading_nonzero.len()
    }

    /// True when no vectors are covered.
    pub fn is_empty(&self) -> bool {
        self.leading_nonzero.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amax_core::CodeParams;

    #[test]
    fn leading_coordinate_fraction_is_one_minus_one_over_q() {
        let params = CodeParams::new(4, 3, 2).unwrap();
        let space = VectorSpace::generate(&params, 81).unwrap();
        let filter = SymmetryFilter::build(&space);
        assert_eq!(filter.len(), 81);
        assert_eq!(filter.count(), 54);
        assert!(!filter.leading_nonzero(0));
        for index in 0..space.len() {
            assert_eq!(filter.leading_nonzero(index), space.vector(index)[0] != 0);
        }
    }
}
