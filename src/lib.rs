//! Random password generation with per-strategy strength scoring.
//!
//! Five named strategies produce candidates for a requested length:
//! pool-based draws (Balanced Mix, Symbol Rich, Easy to Type), a
//! pronounceable syllable builder, and a word-based composer. Each
//! candidate is scored by a deterministic strength heuristic.
//!
//! The randomness is `rand::thread_rng` throughout: fine for suggestion
//! lists, not a cryptographic guarantee.

pub mod generators;
pub mod models;
pub mod strength;

pub use generators::{generate_candidates, generate_candidates_with, GeneratorError};
pub use models::{GenerationRequest, PasswordCandidate, Strategy, Strength, StrengthInfo};
pub use strength::evaluate_strength;
