//! # oscr-mdl - Two-part MDL complexity estimates
//!
//! Estimates the descriptive complexity of a symbol sequence with a
//! minimum description length scheme:
//!
//! 1. **Dictionary encoding** (OSCR): repeatedly replace the substring with
//!    the best stochastic complexity reduction score by a fresh model
//!    reference, until no literal symbols remain.
//! 2. **Prefix coding**: build a Huffman-style code over the resulting token
//!    stream by greedy frequency merging.
//!
//! The model size plus the code-table size approximates *sophistication*;
//! adding the residual token count approximates Kolmogorov complexity.
//!
//! ## Example
//!
//! ```
//! use oscr_mdl::estimate_sizes;
//!
//! let input: Vec<char> = "abab".chars().collect();
//! let estimate = estimate_sizes(&input);
//!
//! assert_eq!(estimate.sophistication, 3);
//! assert_eq!(estimate.approx_complexity, 5);
//! ```
//!
//! ## Logging
//!
//! Progress is reported through `tracing` events (`debug` per encoder round,
//! `info` per finished encoding). Install a subscriber to see them.

mod code;
mod config;
mod counting;
mod encoder;
mod encoding;
mod error;
mod estimate;
mod id_gen;
mod model;
mod segment;
mod token;

#[cfg(test)]
mod tests;

pub use code::{build_code, CodeTable};
pub use config::{EncoderConfig, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
pub use counting::{scr, substring_counts, Candidate, SubstringCounts};
pub use encoder::{encode, Encoder};
pub use encoding::{Encoding, EncodingStats, ExpandIter};
pub use error::{Error, Result};
pub use estimate::{
    estimate_cells, estimate_sizes, estimate_sizes_with, write_cells, SizeEstimate,
};
pub use model::Model;
pub use token::Token;
