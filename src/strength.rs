// src/strength.rs
//
// Password strength heuristic. Pure and deterministic: the same input
// always produces the same StrengthInfo, and nothing here can fail
// (the empty string simply scores worst).

use crate::models::{Strength, StrengthInfo};

/// Symbols the evaluator recognizes. Matches the narrow set the
/// generators embed, chosen to avoid problematic shell characters.
const SYMBOLS: &str = "!#$&";

/// Score a password and explain the score.
///
/// Rules run in a fixed order and each appends at most one detail line.
/// Contributions are cumulative, not mutually exclusive:
///
/// 1. length >= 12 -> +25, length >= 8 -> +15, else +0
/// 2. character-type diversity over {lower, upper, digit, symbol}:
///    4 types -> +30, 3 -> +20, 2 -> +10, else +0
/// 3. length >= 16 -> +15
/// 4. symbol present and >= 3 types -> +10
///
/// Classification: >= 70 strong, >= 40 medium, else weak.
///
/// The score is additive and not clamped. The practical maximum is 80
/// (25 + 30 + 15 + 10), so it stays under 100 today, but the sum is
/// reported as-is rather than normalized.
pub fn evaluate_strength(text: &str) -> StrengthInfo {
    let mut score: u32 = 0;
    let mut details = Vec::with_capacity(4);

    let length = text.chars().count();
    if length >= 12 {
        score += 25;
        details.push("good length".to_string());
    } else if length >= 8 {
        score += 15;
        details.push("adequate length".to_string());
    } else {
        details.push("too short".to_string());
    }

    let has_lower = text.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = text.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    let has_symbol = text.chars().any(|c| SYMBOLS.contains(c));

    let types = [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|present| **present)
        .count();

    match types {
        4 => {
            score += 30;
            details.push("excellent character variety".to_string());
        }
        3 => {
            score += 20;
            details.push("good character variety".to_string());
        }
        2 => {
            score += 10;
            details.push("some character variety".to_string());
        }
        _ => {
            details.push("little character variety".to_string());
        }
    }

    if length >= 16 {
        score += 15;
        details.push("very long".to_string());
    }

    if has_symbol && types >= 3 {
        score += 10;
        details.push("good symbol usage".to_string());
    }

    let strength = if score >= 70 {
        Strength::Strong
    } else if score >= 40 {
        Strength::Medium
    } else {
        Strength::Weak
    };

    StrengthInfo {
        strength,
        score,
        details,
    }
}
