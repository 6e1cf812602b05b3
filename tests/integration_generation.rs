use passforge::{generate_candidates, generate_candidates_with, Strategy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn every_candidate_has_the_requested_length() {
    for length in 6..=32 {
        let candidates = generate_candidates(length).unwrap();
        for candidate in &candidates {
            assert_eq!(
                candidate.text.chars().count(),
                length,
                "{} at length {length}: {:?}",
                candidate.strategy.label(),
                candidate.text
            );
        }
    }
}

#[test]
fn strategy_presence_follows_the_length_rules() {
    for length in 6..=32 {
        let candidates = generate_candidates(length).unwrap();
        let strategies: Vec<Strategy> = candidates.iter().map(|c| c.strategy).collect();

        assert!(strategies.contains(&Strategy::BalancedMix));
        assert!(strategies.contains(&Strategy::Pronounceable));
        assert!(strategies.contains(&Strategy::EasyToType));

        let wordy = length >= 8;
        assert_eq!(strategies.contains(&Strategy::WordBased), wordy);
        assert_eq!(strategies.contains(&Strategy::SymbolRich), wordy);
    }
}

#[test]
fn length_twelve_yields_five_candidates_in_fixed_order() {
    let candidates = generate_candidates(12).unwrap();
    let labels: Vec<&str> = candidates.iter().map(|c| c.strategy.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Balanced Mix",
            "Pronounceable",
            "Word-Based",
            "Symbol Rich",
            "Easy to Type",
        ]
    );
}

#[test]
fn repeated_calls_agree_on_shape_but_not_text() {
    let first = generate_candidates(16).unwrap();
    let second = generate_candidates(16).unwrap();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.strategy, b.strategy);
        assert_eq!(a.text.chars().count(), b.text.chars().count());
    }
    // Texts are random draws; at least one of the five pairs should
    // differ (the odds of a full collision are negligible).
    assert!(first.iter().zip(&second).any(|(a, b)| a.text != b.text));
}

#[test]
fn pronounceable_at_length_ten_carries_its_reserved_extras() {
    for _ in 0..100 {
        let candidates = generate_candidates(10).unwrap();
        let pronounceable = candidates
            .iter()
            .find(|c| c.strategy == Strategy::Pronounceable)
            .unwrap();
        let digits = pronounceable.text.chars().filter(|c| c.is_ascii_digit()).count();
        let symbols = pronounceable.text.chars().filter(|c| "!#$&".contains(*c)).count();
        assert_eq!(digits, 1, "in {:?}", pronounceable.text);
        assert_eq!(symbols, 1, "in {:?}", pronounceable.text);
    }
}

#[test]
fn word_based_candidates_stay_in_their_declared_alphabet() {
    for length in 8..=32 {
        let candidates = generate_candidates(length).unwrap();
        let word_based = candidates
            .iter()
            .find(|c| c.strategy == Strategy::WordBased)
            .unwrap();
        assert!(
            word_based
                .text
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "!#&".contains(c)),
            "unexpected character in {:?}",
            word_based.text
        );
    }
}

#[test]
fn candidates_are_scored_at_generation_time() {
    let candidates = generate_candidates(16).unwrap();
    for candidate in &candidates {
        assert_eq!(candidate.strength, passforge::evaluate_strength(&candidate.text));
        assert!(!candidate.strength.details.is_empty());
    }
}

#[test]
fn a_seeded_rng_reproduces_the_batch() {
    let mut a = ChaCha8Rng::seed_from_u64(42);
    let mut b = ChaCha8Rng::seed_from_u64(42);
    let first = generate_candidates_with(&mut a, 14).unwrap();
    let second = generate_candidates_with(&mut b, 14).unwrap();
    for (x, y) in first.iter().zip(&second) {
        assert_eq!(x.text, y.text);
    }
}

#[test]
fn zero_length_is_an_input_error() {
    assert!(generate_candidates(0).is_err());
}
