// src/models.rs
use serde::{Deserialize, Serialize};

/// Shortest length a caller may request.
pub const MIN_LENGTH: usize = 6;
/// Longest length a caller may request.
pub const MAX_LENGTH: usize = 32;

/// A validated generation request. The length is clamped to the
/// supported range at construction and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
}

impl GenerationRequest {
    /// Build a request, clamping the length to [MIN_LENGTH, MAX_LENGTH].
    pub fn clamped(length: usize) -> Self {
        GenerationRequest {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
        }
    }
}

/// The named strategies, in the order the orchestrator runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    BalancedMix,
    Pronounceable,
    WordBased,
    SymbolRich,
    EasyToType,
}

impl Strategy {
    /// Display name shown to the user next to each candidate.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::BalancedMix => "Balanced Mix",
            Strategy::Pronounceable => "Pronounceable",
            Strategy::WordBased => "Word-Based",
            Strategy::SymbolRich => "Symbol Rich",
            Strategy::EasyToType => "Easy to Type",
        }
    }
}

/// Overall strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

/// Result of evaluating one password.
///
/// `details` lists the criteria in evaluation order: length check,
/// character-type check, long-password bonus, symbol-usage bonus.
/// `score` is additive and intentionally not clamped; see
/// `strength::evaluate_strength`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthInfo {
    pub strength: Strength,
    pub score: u32,
    pub details: Vec<String>,
}

/// One generated password together with the strategy that produced it
/// and its strength evaluation. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordCandidate {
    pub text: String,
    pub strategy: Strategy,
    pub strength: StrengthInfo,
}
