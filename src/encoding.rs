//! The result of a dictionary-encoding pass.

use crate::model::Model;
use crate::token::Token;
use std::slice;

/// A model together with the token stream it was built for.
///
/// Expanding every reference in the token stream reconstructs the input:
///
/// ```
/// use oscr_mdl::encode;
///
/// let input: Vec<char> = "abcabcabc".chars().collect();
/// let encoding = encode(&input, 2, 400).unwrap();
///
/// let reconstructed: String = encoding.iter().collect();
/// assert_eq!(reconstructed, "abcabcabc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding<T> {
    pub(crate) model: Model<T>,
    pub(crate) tokens: Vec<Token<T>>,
    pub(crate) input_len: usize,
    pub(crate) rounds: usize,
    pub(crate) narrowed: bool,
}

impl<T> Encoding<T> {
    pub fn model(&self) -> &Model<T> {
        &self.model
    }

    pub fn tokens(&self) -> &[Token<T>] {
        &self.tokens
    }

    /// Number of tokens left in the stream. A literal run counts once.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Length of the encoded input.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Number of substitution rounds performed.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Whether the window fell back to single-symbol substitutions.
    pub fn narrowed(&self) -> bool {
        self.narrowed
    }

    /// Whether literal runs were left behind (only possible with a round cap).
    pub fn has_literals(&self) -> bool {
        self.tokens.iter().any(Token::is_literal)
    }

    /// Splits the encoding into its model and token stream.
    pub fn into_parts(self) -> (Model<T>, Vec<Token<T>>) {
        (self.model, self.tokens)
    }

    /// Returns an iterator over the reconstructed input.
    pub fn iter(&self) -> ExpandIter<'_, T> {
        ExpandIter {
            model: &self.model,
            tokens: self.tokens.iter(),
            current: <&[T]>::default().iter(),
        }
    }

    pub fn stats(&self) -> EncodingStats {
        EncodingStats {
            input_length: self.input_len,
            token_count: self.tokens.len(),
            model_entries: self.model.len(),
            model_size: self.model.literal_size(),
            rounds: self.rounds,
            narrowed: self.narrowed,
        }
    }
}

/// Iterator that expands model references back into input symbols.
pub struct ExpandIter<'a, T> {
    model: &'a Model<T>,
    tokens: slice::Iter<'a, Token<T>>,
    current: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for ExpandIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                return Some(value);
            }
            let expansion: &'a [T] = match self.tokens.next()? {
                Token::Literal(run) => run,
                Token::Reference(id) => self.model.get(*id).unwrap_or_default(),
            };
            self.current = expansion.iter();
        }
    }
}

impl<'a, T> IntoIterator for &'a Encoding<T> {
    type Item = &'a T;
    type IntoIter = ExpandIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Statistics about a dictionary encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingStats {
    /// Number of input symbols
    pub input_length: usize,
    /// Tokens left in the stream
    pub token_count: usize,
    /// Number of model entries
    pub model_entries: usize,
    /// Sum of model entry lengths
    pub model_size: usize,
    /// Substitution rounds performed
    pub rounds: usize,
    /// Whether the single-symbol fallback kicked in
    pub narrowed: bool,
}

impl EncodingStats {
    /// Returns the token stream length as a percentage of the input length.
    ///
    /// Lower is better. 100% means no reduction.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_length == 0 {
            0.0
        } else {
            (self.token_count as f64 / self.input_length as f64) * 100.0
        }
    }
}
