//! Greedy dictionary encoder (OSCR).
//!
//! Each round scores every distinct substring of the remaining literal runs
//! with [`scr`](crate::counting::scr), replaces all non-overlapping
//! occurrences of the best one with a fresh model reference, and repeats
//! until no literal symbols are left.
//!
//! When no multi-symbol substring would pay for itself (best score `>= 1`),
//! the window collapses to single symbols. Those substitutions add nothing
//! to the model's value; they only drain the remaining literal runs so the
//! loop can finish.
//!
//! # Example
//!
//! ```
//! use oscr_mdl::{Encoder, EncoderConfig, Token};
//!
//! let encoder = Encoder::new(EncoderConfig::default()).unwrap();
//! let input: Vec<char> = "abab".chars().collect();
//! let encoding = encoder.encode(&input);
//!
//! assert_eq!(encoding.model().get(0), Some(&['a', 'b'][..]));
//! assert_eq!(encoding.tokens(), &[Token::Reference(0), Token::Reference(0)]);
//! ```

use crate::config::EncoderConfig;
use crate::counting::substring_counts;
use crate::encoding::Encoding;
use crate::error::Result;
use crate::id_gen::IdGenerator;
use crate::model::Model;
use crate::segment::SegmentList;
use std::hash::Hash;
use tracing::{debug, info, warn};

/// Dictionary encoder with a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Creates an encoder, rejecting unusable windows.
    pub fn new(config: EncoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes `input` into a model and a token stream.
    pub fn encode<T: Hash + Eq + Clone>(&self, input: &[T]) -> Encoding<T> {
        let total_len = input.len();
        let mut segments = SegmentList::new(input.to_vec());
        let mut model = Model::new();
        let mut id_gen = IdGenerator::new();

        let mut min_len = self.config.min_len;
        let mut max_len = self.config.max_len;
        let mut narrowed = false;
        let mut rounds = 0;

        while segments.has_literals() {
            if let Some(limit) = self.config.max_rounds {
                if rounds >= limit {
                    warn!(
                        limit,
                        tokens = segments.len(),
                        "round limit reached, literals remain"
                    );
                    break;
                }
            }

            let counts = substring_counts(segments.runs(), min_len, max_len);
            let can_narrow = !narrowed && min_len > 1;

            let (substring, count, score) = match counts.lowest_scr(total_len) {
                Some((best, score)) if score < 1.0 || !can_narrow => {
                    (best.substring.to_vec(), best.count, score)
                }
                None if !can_narrow => break,
                best => {
                    debug!(
                        candidates = counts.len(),
                        best_score = best.map(|(_, score)| score),
                        "no improving substring, narrowing window to single symbols"
                    );
                    narrowed = true;
                    min_len = 1;
                    max_len = 1;
                    continue;
                }
            };

            let id = id_gen.get();
            let replaced = segments.replace_all(&substring, id);
            debug_assert_eq!(
                replaced, count,
                "replacements must match the counted occurrences"
            );

            rounds += 1;
            debug!(
                round = rounds,
                id,
                len = substring.len(),
                count,
                score,
                tokens = segments.len(),
                "substituted substring"
            );
            model.insert(id, substring);
        }

        info!(
            input_len = total_len,
            tokens = segments.len(),
            model_entries = id_gen.issued(),
            rounds,
            narrowed,
            "encoding complete"
        );

        Encoding {
            model,
            tokens: segments.into_tokens(),
            input_len: total_len,
            rounds,
            narrowed,
        }
    }
}

/// Encodes `input` with the substring window `[min_len, max_len]`.
///
/// Fails if `min_len` is 0 or greater than `max_len`.
pub fn encode<T: Hash + Eq + Clone>(
    input: &[T],
    min_len: usize,
    max_len: usize,
) -> Result<Encoding<T>> {
    let encoder = Encoder::new(EncoderConfig::window(min_len, max_len))?;
    Ok(encoder.encode(input))
}
