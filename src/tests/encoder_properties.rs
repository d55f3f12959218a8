use crate::config::EncoderConfig;
use crate::encoder::{encode, Encoder};
use crate::estimate::estimate_sizes;
use crate::token::Token;
use proptest::prelude::*;

/// Longest input fed to the encoder by the fuzz tests.
const FUZZ_MAX_LEN: usize = 48;

/// Small alphabets keep repetitions frequent.
fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..64)
}

proptest! {
    /// Property 1: Roundtrip fidelity
    /// Expanding every reference reconstructs the input.
    #[test]
    fn prop_roundtrip(input in sequence()) {
        let encoding = encode(&input, 2, 400).unwrap();
        let reconstructed: Vec<u8> = encoding.iter().copied().collect();
        prop_assert_eq!(reconstructed, input);
    }

    /// Property 2: Token count never exceeds the input length.
    #[test]
    fn prop_token_count_bounded(input in sequence()) {
        let encoding = encode(&input, 2, 400).unwrap();
        prop_assert!(encoding.token_count() <= input.len());
    }

    /// Property 3: Termination
    /// Every round consumes at least one literal symbol.
    #[test]
    fn prop_rounds_bounded(input in sequence()) {
        let encoding = encode(&input, 2, 400).unwrap();
        prop_assert!(encoding.rounds() <= input.len());
        prop_assert_eq!(encoding.model().len(), encoding.rounds());
    }

    /// Property 4: Without a round cap, no literal runs remain.
    #[test]
    fn prop_all_literals_consumed(input in sequence()) {
        let encoding = encode(&input, 2, 400).unwrap();
        prop_assert!(!encoding.has_literals());
    }

    /// Property 5: References point at existing model entries.
    #[test]
    fn prop_references_resolve(input in sequence()) {
        let encoding = encode(&input, 2, 400).unwrap();
        for token in encoding.tokens() {
            if let Token::Reference(id) = token {
                prop_assert!(encoding.model().get(*id).is_some());
            }
        }
    }

    /// Property 6: Multi-symbol entries precede single-symbol ones.
    /// Once the window narrows it never widens again.
    #[test]
    fn prop_window_narrows_once(input in sequence()) {
        let encoding = encode(&input, 2, 400).unwrap();
        let lengths: Vec<usize> = encoding
            .model()
            .iter()
            .map(|(_, entry)| entry.len())
            .collect();
        let first_single = lengths
            .iter()
            .position(|&len| len == 1)
            .unwrap_or(lengths.len());

        prop_assert!(lengths[..first_single].iter().all(|&len| len >= 2));
        prop_assert!(lengths[first_single..].iter().all(|&len| len == 1));
        prop_assert_eq!(encoding.narrowed(), first_single < lengths.len());
    }

    /// Property 7: Model entries are never longer than the window allows.
    #[test]
    fn prop_entries_respect_window(input in sequence(), max_len in 2usize..8) {
        let encoding = encode(&input, 2, max_len).unwrap();
        for (_, entry) in encoding.model().iter() {
            prop_assert!(!entry.is_empty());
            prop_assert!(entry.len() <= max_len);
        }
    }

    /// Property 8: Round caps stop early but still reconstruct the input.
    #[test]
    fn prop_round_cap_roundtrip(input in sequence(), cap in 1usize..4) {
        let encoder = Encoder::new(EncoderConfig::default().with_max_rounds(cap)).unwrap();
        let encoding = encoder.encode(&input);

        prop_assert!(encoding.rounds() <= cap);
        let reconstructed: Vec<u8> = encoding.iter().copied().collect();
        prop_assert_eq!(reconstructed, input);
    }

    /// Property 9: Encoding and estimates are deterministic.
    #[test]
    fn prop_deterministic(input in sequence()) {
        prop_assert_eq!(encode(&input, 2, 400).unwrap(), encode(&input, 2, 400).unwrap());
        prop_assert_eq!(estimate_sizes(&input), estimate_sizes(&input));
    }

    /// Property 10: Estimate components add up.
    #[test]
    fn prop_estimate_consistent(input in sequence()) {
        let estimate = estimate_sizes(&input);
        let encoding = encode(&input, 2, 400).unwrap();

        prop_assert_eq!(estimate.model_size, encoding.model().literal_size());
        prop_assert_eq!(estimate.residual_tokens, encoding.token_count());
        prop_assert_eq!(estimate.sophistication, estimate.model_size + estimate.code_size);
        prop_assert_eq!(
            estimate.approx_complexity,
            estimate.sophistication + estimate.residual_tokens
        );
    }

    /// Property 11: A repeated block costs no more model space than the block.
    #[test]
    fn prop_repeated_block_model_bounded(
        block in prop::collection::vec(0u8..4, 1..8),
        reps in 2usize..8,
    ) {
        let input: Vec<u8> = block.iter().copied().cycle().take(block.len() * reps).collect();
        let encoding = encode(&input, 2, 400).unwrap();
        prop_assert!(encoding.model().literal_size() <= input.len());
    }
}

/// Bolero fuzz test: No panics on arbitrary input
#[test]
fn fuzz_encode_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let input = &input[..input.len().min(FUZZ_MAX_LEN)];

        let encoding = encode(input, 2, 400).unwrap();
        let _ = encoding.stats();
        let _ = estimate_sizes(input);

        let reconstructed: Vec<u8> = encoding.iter().copied().collect();
        assert_eq!(reconstructed, input);
    });
}

/// Bolero fuzz test: Roundtrip over a small alphabet
#[test]
fn fuzz_encode_roundtrip_small_alphabet() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let input: Vec<u8> = input
            .iter()
            .take(FUZZ_MAX_LEN)
            .map(|byte| byte % 3)
            .collect();

        let encoding = encode(&input, 2, 400).unwrap();
        assert!(encoding.token_count() <= input.len());

        let reconstructed: Vec<u8> = encoding.iter().copied().collect();
        assert_eq!(
            reconstructed,
            input,
            "Roundtrip failed for input of length {}",
            input.len()
        );
    });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_long_periodic_input() {
        let input: Vec<char> = "abcd".repeat(32).chars().collect();
        let encoding = encode(&input, 2, 400).unwrap();

        let reconstructed: String = encoding.iter().collect();
        assert_eq!(reconstructed, "abcd".repeat(32));
        assert!(
            encoding.token_count() <= input.len() / 4,
            "periodic input should collapse: {} tokens",
            encoding.token_count()
        );
    }

    #[test]
    fn test_serialized_grid_input() {
        let input: Vec<char> = "0 0 1 1 0 0 1 1".chars().collect();
        let encoding = encode(&input, 2, 400).unwrap();

        let reconstructed: String = encoding.iter().collect();
        assert_eq!(reconstructed, "0 0 1 1 0 0 1 1");
        assert!(encoding.token_count() <= input.len());
    }
}
