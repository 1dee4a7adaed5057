use std::fmt::Write as _;

use amax_core::{AmaxError, CodeParams, ErrorInfo};
use tracing::debug;

/// A single coordinate value in `0..q`.
pub type Symbol = u32;

/// Enumerates every length-`n` vector over `0..q` in natural order.
///
/// The first coordinate is the most significant digit, so the all-zero vector
/// comes first and vectors are lexicographically increasing.
pub fn enumerate(params: &CodeParams, max_vectors: usize) -> Result<Vec<Vec<Symbol>>, AmaxError> {
    let size = params.checked_space_size(max_vectors)?;
    let length = params.length();
    let q = params.alphabet();
    let mut vectors = Vec::new();
    vectors.try_reserve_exact(size)?;
    let mut current = vec![0 as Symbol; length];
    for _ in 0..size {
        vectors.push(current.clone());
        for coord in (0..length).rev() {
            current[coord] += 1;
            if current[coord] < q {
                break;
            }
            current[coord] = 0;
        }
    }
    Ok(vectors)
}

/// Number of nonzero coordinates.
pub fn weight(vector: &[Symbol]) -> usize {
    vector.iter().filter(|&&symbol| symbol != 0).count()
}

/// Stable sort by ascending weight; ties keep their relative order.
pub fn sort_by_weight(vectors: &mut [Vec<Symbol>]) {
    vectors.sort_by_key(|vector| weight(vector));
}

/// Every vector of length `n` over `0..q`, indexed in ascending weight order.
///
/// Index 0 is the all-zero vector. Within one weight, vectors keep the natural
/// enumeration order, so the first vector of weight `w` is `0…01…1`.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    params: CodeParams,
    symbols: Vec<Symbol>,
    weights: Vec<usize>,
    /// Maps natural enumeration rank to sorted index.
    sorted_index: Vec<usize>,
}

impl VectorSpace {
    /// Generates and sorts the full space for `params`.
    pub fn generate(params: &CodeParams, max_vectors: usize) -> Result<Self, AmaxError> {
        let mut vectors = enumerate(params, max_vectors)?;
        sort_by_weight(&mut vectors);

        let size = vectors.len();
        let q = params.alphabet() as usize;
        let mut symbols = Vec::new();
        symbols.try_reserve_exact(size * params.length())?;
        let mut weights = Vec::with_capacity(size);
        let mut sorted_index = vec![0; size];
        for (index, vector) in vectors.iter().enumerate() {
            weights.push(weight(vector));
            sorted_index[natural_rank(vector, q)] = index;
            symbols.extend_from_slice(vector);
        }
        debug!(
            n = params.length(),
            q = params.alphabet(),
            vectors = size,
            "generated vector space"
        );
        Ok(Self {
            params: *params,
            symbols,
            weights,
            sorted_index,
        })
    }

    /// Parameters the space was generated for.
    pub fn params(&self) -> &CodeParams {
        &self.params
    }

    /// Number of vectors, `q^n`.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false for a generated space.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Vector length `n`.
    pub fn length(&self) -> usize {
        self.params.length()
    }

    /// Symbols of the vector at `index`.
    pub fn vector(&self, index: usize) -> &[Symbol] {
        let n = self.length();
        &self.symbols[index * n..(index + 1) * n]
    }

    /// Weight of the vector at `index`.
    pub fn weight(&self, index: usize) -> usize {
        self.weights[index]
    }

    /// Iterates over all vectors in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[Symbol]> + '_ {
        self.symbols.chunks_exact(self.length())
    }

    /// True iff `index` is the first vector of its weight.
    pub fn is_weight_representative(&self, index: usize) -> bool {
        index == 0 || self.weights[index - 1] != self.weights[index]
    }

    /// Looks up the index of a vector, if it belongs to this space.
    pub fn index_of(&self, vector: &[Symbol]) -> Option<usize> {
        if vector.len() != self.length() {
            return None;
        }
        let q = self.params.alphabet() as usize;
        if vector.iter().any(|&symbol| symbol as usize >= q) {
            return None;
        }
        self.sorted_index.get(natural_rank(vector, q)).copied()
    }

    /// Renders a vector as a string; digits are concatenated when `q <= 10`.
    pub fn format_vector(&self, index: usize) -> String {
        format_symbols(self.vector(index), self.params.alphabet())
    }
}

/// Position of `vector` in the natural enumeration.
fn natural_rank(vector: &[Symbol], q: usize) -> usize {
    vector
        .iter()
        .fold(0usize, |rank, &symbol| rank * q + symbol as usize)
}

/// Renders symbols as a compact string (`"0110"`), or comma separated for `q > 10`.
pub fn format_symbols(symbols: &[Symbol], alphabet: u32) -> String {
    let mut out = String::with_capacity(symbols.len() * 2);
    for (idx, symbol) in symbols.iter().enumerate() {
        if alphabet > 10 && idx > 0 {
            out.push(',');
        }
        let _ = write!(out, "{symbol}");
    }
    out
}

/// Parses the output of [`format_symbols`].
pub fn parse_symbols(text: &str, alphabet: u32) -> Result<Vec<Symbol>, AmaxError> {
    let parsed: Result<Vec<Symbol>, String> = if alphabet > 10 {
        text.split(',')
            .map(|part| part.trim().parse::<Symbol>().map_err(|_| part.to_string()))
            .collect()
    } else {
        text.chars()
            .map(|ch| ch.to_digit(10).ok_or_else(|| ch.to_string()))
            .collect()
    };
    let symbols = parsed.map_err(|err| {
        AmaxError::Code(
            ErrorInfo::new("invalid-word", "word contains a non-numeric symbol")
                .with_context("word", text)
                .with_context("reason", err),
        )
    })?;
    if let Some(&bad) = symbols.iter().find(|&&symbol| symbol >= alphabet) {
        return Err(AmaxError::Code(
            ErrorInfo::new("symbol-out-of-range", "word uses a symbol outside the alphabet")
                .with_context("word", text)
                .with_context("symbol", bad)
                .with_context("q", alphabet),
        ));
    }
    Ok(symbols)
}
