//! Two-part MDL size estimates.
//!
//! The model literal size plus the code-table size approximates the
//! sophistication (useful information) of a sequence. Adding the number of
//! tokens left in the stream approximates its Kolmogorov complexity. The
//! second figure adds a token count to bit-length sums; the units are kept
//! as they are and the result is only meaningful as a relative measure.

use crate::code::build_code;
use crate::config::EncoderConfig;
use crate::encoder::Encoder;
use crate::error::Result;
use std::fmt::Display;
use std::hash::Hash;
use tracing::info;

/// Size figures for one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeEstimate {
    /// Model literal size plus code-table size
    pub sophistication: usize,
    /// Sophistication plus residual token count
    pub approx_complexity: usize,
    /// Sum of model entry lengths
    pub model_size: usize,
    /// Sum of codeword lengths over the final token stream's distinct tokens
    pub code_size: usize,
    /// Tokens left in the final stream
    pub residual_tokens: usize,
}

/// Estimates sizes with the default window `[2, 400]`.
pub fn estimate_sizes<T: Hash + Eq + Clone>(input: &[T]) -> SizeEstimate {
    estimate_with_encoder(input, &Encoder::default())
}

/// Estimates sizes with a custom encoder configuration.
pub fn estimate_sizes_with<T: Hash + Eq + Clone>(
    input: &[T],
    config: &EncoderConfig,
) -> Result<SizeEstimate> {
    let encoder = Encoder::new(*config)?;
    Ok(estimate_with_encoder(input, &encoder))
}

fn estimate_with_encoder<T: Hash + Eq + Clone>(input: &[T], encoder: &Encoder) -> SizeEstimate {
    let encoding = encoder.encode(input);
    let code = build_code(encoding.tokens());

    let model_size = encoding.model().literal_size();
    let code_size = code.code_size();
    let residual_tokens = encoding.token_count();
    let sophistication = model_size + code_size;
    let approx_complexity = sophistication + residual_tokens;

    info!(
        input_len = input.len(),
        model_size,
        code_size,
        residual_tokens,
        sophistication,
        approx_complexity,
        "estimated sizes"
    );

    SizeEstimate {
        sophistication,
        approx_complexity,
        model_size,
        code_size,
        residual_tokens,
    }
}

/// Flattens a grid of cells into one string: every cell is formatted with
/// `Display` and all cells are joined by single spaces, row after row.
///
/// ```
/// use oscr_mdl::write_cells;
///
/// let grid = vec![vec![0, 1], vec![1, 0]];
/// assert_eq!(write_cells(&grid), "0 1 1 0");
/// ```
pub fn write_cells<R, C>(rows: &[R]) -> String
where
    R: AsRef<[C]>,
    C: Display,
{
    rows.iter()
        .flat_map(|row| row.as_ref().iter())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Estimates sizes for a grid of cells, serialized with [`write_cells`].
pub fn estimate_cells<R, C>(rows: &[R]) -> SizeEstimate
where
    R: AsRef<[C]>,
    C: Display,
{
    let symbols: Vec<char> = write_cells(rows).chars().collect();
    estimate_sizes(&symbols)
}
