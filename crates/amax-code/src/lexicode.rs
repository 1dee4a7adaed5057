use crate::distance::DistanceTable;

/// Greedy code over `candidates`, taken in order.
///
/// Each candidate is kept when it is far enough from every word kept so far.
/// This is the first leaf the canonical search reaches, so its size is a
/// lower bound for the maximum.
pub fn greedy(table: &DistanceTable, candidates: &[usize]) -> Vec<usize> {
    let mut code: Vec<usize> = Vec::new();
    for &candidate in candidates {
        if code.iter().all(|&word| table.satisfies(word, candidate)) {
            code.push(candidate);
        }
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::VectorSpace;
    use amax_core::CodeParams;

    #[test]
    fn greedy_lexicode_reaches_hamming_bound_for_length_seven() {
        let params = CodeParams::binary(7, 3).unwrap();
        let space = VectorSpace::generate(&params, 128).unwrap();
        let table = DistanceTable::build(&space, 3).unwrap();
        let all: Vec<usize> = (0..space.len()).collect();
        let code = greedy(&table, &all);
        assert_eq!(code[0], 0);
        for (i, &a) in code.iter().enumerate() {
            for &b in &code[i + 1..] {
                assert!(table.satisfies(a, b));
            }
        }
        assert_eq!(code.len(), 16);
    }
}
