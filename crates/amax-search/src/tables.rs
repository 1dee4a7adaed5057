use amax_code::{DistanceTable, SymmetryFilter, VectorSpace};
use amax_core::{AmaxError, CodeParams};
use tracing::debug;

use crate::config::SearchConfig;

/// Read-only inputs shared by every search over one parameter set.
#[derive(Debug, Clone)]
pub struct SearchTables {
    space: VectorSpace,
    table: DistanceTable,
    filter: SymmetryFilter,
}

impl SearchTables {
    /// Generates the space and builds the distance table and symmetry filter.
    pub fn build(params: &CodeParams, max_vectors: usize) -> Result<Self, AmaxError> {
        let space = VectorSpace::generate(params, max_vectors)?;
        let table = DistanceTable::build(&space, params.min_distance())?;
        let filter = SymmetryFilter::build(&space);
        debug!(vectors = space.len(), "search tables ready");
        Ok(Self {
            space,
            table,
            filter,
        })
    }

    /// Parameters of the tables.
    pub fn params(&self) -> &CodeParams {
        self.space.params()
    }

    /// The weight-sorted vector space.
    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    /// The pairwise distance table.
    pub fn table(&self) -> &DistanceTable {
        &self.table
    }

    /// Leading-coordinate flags.
    pub fn filter(&self) -> &SymmetryFilter {
        &self.filter
    }

    /// Level-0 candidates under `config`: every index, or only the even
    /// weight ones when that restriction applies.
    pub fn initial_candidates(&self, config: &SearchConfig) -> Vec<usize> {
        if config.even_weight_applies(self.params()) {
            (0..self.space.len())
                .filter(|&index| self.space.weight(index) % 2 == 0)
                .collect()
        } else {
            (0..self.space.len()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_weight_halves_binary_candidates() {
        let tables = SearchTables::build(&CodeParams::binary(6, 4).unwrap(), 64).unwrap();
        assert_eq!(tables.initial_candidates(&SearchConfig::default()).len(), 32);
        assert_eq!(tables.initial_candidates(&SearchConfig::plain()).len(), 64);
    }

    #[test]
    fn limit_propagates_as_parameter_error() {
        let err = SearchTables::build(&CodeParams::binary(7, 3).unwrap(), 100).unwrap_err();
        assert!(matches!(err, AmaxError::Parameter(_)));
    }
}
