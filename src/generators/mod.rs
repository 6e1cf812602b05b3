// src/generators/mod.rs

pub mod pool;
pub mod pronounceable;
pub mod words;

use rand::Rng;
use thiserror::Error;

use crate::models::{GenerationRequest, PasswordCandidate, Strategy};
use crate::strength::evaluate_strength;

use pool::CharacterPool;

/// Minimum length a strategy needs before the word-based and
/// symbol-rich variants are worth running.
const WORDY_MIN_LENGTH: usize = 8;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid password length: {0} (must be at least 1)")]
    InvalidLength(usize),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate one candidate per applicable strategy for the requested
/// length, each scored immediately after generation.
///
/// The length is clamped to the supported [6, 32] range; a zero length
/// is rejected outright rather than silently bumped, since it can only
/// come from a caller bug. Uses the process thread RNG.
pub fn generate_candidates(length: usize) -> Result<Vec<PasswordCandidate>> {
    let mut rng = rand::thread_rng();
    generate_candidates_with(&mut rng, length)
}

/// Same as [`generate_candidates`] but with an injected random source,
/// so tests can drive generation from a seeded RNG.
pub fn generate_candidates_with<R: Rng>(rng: &mut R, length: usize) -> Result<Vec<PasswordCandidate>> {
    if length == 0 {
        return Err(GeneratorError::InvalidLength(length));
    }

    let request = GenerationRequest::clamped(length);
    let n = request.length;
    log::debug!("generating candidates for length {n}");

    let mut candidates = Vec::with_capacity(5);

    let push = |candidates: &mut Vec<PasswordCandidate>, strategy: Strategy, text: String| {
        debug_assert_eq!(text.chars().count(), n);
        let strength = evaluate_strength(&text);
        candidates.push(PasswordCandidate {
            text,
            strategy,
            strength,
        });
    };

    push(
        &mut candidates,
        Strategy::BalancedMix,
        CharacterPool::balanced().sample(rng, n),
    );
    push(
        &mut candidates,
        Strategy::Pronounceable,
        pronounceable::generate(rng, n),
    );
    if n >= WORDY_MIN_LENGTH {
        push(&mut candidates, Strategy::WordBased, words::generate(rng, n));
        push(
            &mut candidates,
            Strategy::SymbolRich,
            CharacterPool::symbol_rich().sample(rng, n),
        );
    }
    push(
        &mut candidates,
        Strategy::EasyToType,
        CharacterPool::easy_to_type().sample(rng, n),
    );

    log::debug!("generated {} candidates", candidates.len());
    Ok(candidates)
}
