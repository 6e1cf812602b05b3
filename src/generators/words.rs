// src/generators/words.rs
//
// Word-based generation: one memorable word component sized to the
// requested length, followed by a number, optionally one symbol, and
// vowel padding to fill whatever space is left.

use rand::seq::SliceRandom;
use rand::Rng;

/// Short words for the tightest length tier.
const WORDS: [&str; 32] = [
    "apple", "amber", "bloom", "brave", "cedar", "charm", "cloud", "coral", "crisp", "delta",
    "ember", "fable", "flame", "frost", "globe", "grove", "haven", "ivory", "lemon", "lunar",
    "maple", "noble", "ocean", "olive", "pearl", "plume", "ridge", "river", "stone", "tiger",
    "vivid", "zesty",
];

const PREFIXES: [&str; 8] = ["sun", "sky", "sea", "star", "moon", "fire", "wind", "rain"];

const SUFFIXES: [&str; 8] = [
    "burst", "dance", "field", "light", "rise", "shine", "storm", "trail",
];

/// Longer words for generous lengths, marked at syllable boundaries.
/// The marks are stripped before use.
const LONG_WORDS: [&str; 20] = [
    "ad-ven-ture",
    "but-ter-fly",
    "cal-cu-la-tor",
    "car-ni-val",
    "cat-a-log",
    "cel-e-brate",
    "choc-o-late",
    "dis-cov-er-y",
    "el-e-phant",
    "fan-tas-tic",
    "gen-er-a-tor",
    "har-mo-ny",
    "hur-ri-cane",
    "lab-y-rinth",
    "mag-nif-i-cent",
    "mar-ma-lade",
    "tel-e-scope",
    "um-brel-la",
    "vol-ca-no",
    "won-der-ful",
];

const SYMBOLS: [char; 3] = ['!', '#', '&'];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Generate a word-based password of exactly `length` characters.
/// Callers only invoke this strategy for lengths of 8 and up.
pub fn generate<R: Rng>(rng: &mut R, length: usize) -> String {
    let mut password = word_component(rng, length);

    let remaining = length.saturating_sub(password.len());
    if remaining >= 4 {
        // Either a year-like number or a plain three-digit one.
        if rng.gen_bool(0.5) {
            password.push_str(&rng.gen_range(2020..=2030).to_string());
        } else {
            password.push_str(&rng.gen_range(100..=999).to_string());
        }
    } else if remaining >= 2 {
        password.push_str(&rng.gen_range(20..=99).to_string());
    } else if remaining == 1 {
        password.push(char::from(b'0' + rng.gen_range(2..10)));
    }

    if password.len() < length {
        password.push(*SYMBOLS.choose(rng).unwrap());
    }

    while password.len() < length {
        password.push(*VOWELS.choose(rng).unwrap());
    }

    password.truncate(length);
    password
}

fn word_component<R: Rng>(rng: &mut R, length: usize) -> String {
    if length <= 8 {
        capitalize(WORDS.choose(rng).unwrap())
    } else if length <= 12 {
        let prefix = capitalize(PREFIXES.choose(rng).unwrap());
        let suffix = SUFFIXES.choose(rng).unwrap();
        format!("{prefix}{suffix}")
    } else {
        let word = LONG_WORDS.choose(rng).unwrap().replace('-', "");
        capitalize(&word)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
