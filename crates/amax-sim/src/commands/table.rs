use std::error::Error;

use amax_code::{hamming, parse_symbols};
use amax_search::SearchConfig;
use clap::Args;
use serde::Serialize;

use super::{build_tables, ParamArgs};
use crate::report::to_canonical_json_bytes;

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Look up one pair of vectors, written as symbol strings.
    #[arg(long, num_args = 2, value_names = ["A", "B"])]
    pub pair: Option<Vec<String>>,
    /// Refuse spaces with more vectors than this.
    #[arg(long)]
    pub max_vectors: Option<usize>,
}

#[derive(Debug, Serialize)]
struct TableSummary {
    vectors: usize,
    min_distance: usize,
    satisfied_pairs: usize,
    min_row: usize,
    max_row: usize,
    bytes: usize,
}

#[derive(Debug, Serialize)]
struct PairLookup {
    first: String,
    second: String,
    first_index: usize,
    second_index: usize,
    distance: usize,
    satisfies: bool,
}

pub fn run(args: &TableArgs) -> Result<(), Box<dyn Error>> {
    let params = args.params.params()?;
    let mut config = SearchConfig::default();
    if let Some(limit) = args.max_vectors {
        config.max_vectors = limit;
    }
    let tables = build_tables(&params, &config)?;
    let space = tables.space();
    let table = tables.table();

    let json = match &args.pair {
        Some(pair) => {
            let mut indices = Vec::with_capacity(2);
            for text in pair {
                let symbols = parse_symbols(text, params.alphabet())
                    .map_err(|err| Box::new(err) as Box<dyn Error>)?;
                let index = space
                    .index_of(&symbols)
                    .ok_or_else(|| format!("vector {text} does not have length {}", params.length()))?;
                indices.push(index);
            }
            let (a, b) = (indices[0], indices[1]);
            to_canonical_json_bytes(&PairLookup {
                first: space.format_vector(a),
                second: space.format_vector(b),
                first_index: a,
                second_index: b,
                distance: hamming(space.vector(a), space.vector(b)),
                satisfies: table.satisfies(a, b),
            })
        }
        None => {
            let rows: Vec<usize> = (0..table.len()).map(|i| table.row_count(i)).collect();
            to_canonical_json_bytes(&TableSummary {
                vectors: table.len(),
                min_distance: table.min_distance(),
                satisfied_pairs: rows.iter().sum::<usize>() / 2,
                min_row: rows.iter().copied().min().unwrap_or(0),
                max_row: rows.iter().copied().max().unwrap_or(0),
                bytes: table.len() * table.words_per_row() * 8,
            })
        }
    }
    .map_err(|err| Box::new(err) as Box<dyn Error>)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
