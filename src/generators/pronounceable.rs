// src/generators/pronounceable.rs
//
// Builds consonant/vowel syllables that approximate pronounceable
// words, then embeds a digit and/or symbol near the end for strength.
//
// Order of operations matters and is fixed: syllables and padding
// first, then capitalization, then extras insertion, then truncation.
// Insertion happens after capitalization so extras are never
// uppercased away, and truncation last keeps the exact-length
// invariant.

use rand::seq::SliceRandom;
use rand::Rng;

/// Two-letter onsets that read naturally at the start of a syllable.
const CLUSTERS: [&str; 20] = [
    "br", "bl", "ch", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "pl", "pr", "sk", "sl", "sm",
    "sn", "st", "sw", "th", "tr",
];

/// Single consonants, excluding c, q, x and y which tend to produce
/// awkward letter pairs outside the cluster list.
const CONSONANTS: [char; 17] = [
    'b', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'w', 'z',
];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

const SYMBOLS: [char; 4] = ['!', '#', '$', '&'];

/// Generate a pronounceable password of exactly `length` characters.
///
/// Lengths of 10+ reserve room for one digit and one symbol; 8 and 9
/// reserve a digit only; shorter lengths embed nothing. The reserved
/// extras are inserted after the letter body is complete, so they
/// always survive into the final string.
pub fn generate<R: Rng>(rng: &mut R, length: usize) -> String {
    let reserved = if length >= 10 {
        2
    } else if length >= 8 {
        1
    } else {
        0
    };
    let body_len = length.saturating_sub(reserved);

    let target_syllables = std::cmp::max(2, body_len / 3);
    let mut buf: Vec<char> = Vec::with_capacity(length);

    let mut syllables = 0;
    while syllables < target_syllables && buf.len() < body_len {
        if rng.gen_bool(0.3) {
            // Cluster may be cut short when only one slot remains.
            let cluster = CLUSTERS.choose(rng).unwrap();
            for c in cluster.chars() {
                if buf.len() < body_len {
                    buf.push(c);
                }
            }
        } else {
            buf.push(*CONSONANTS.choose(rng).unwrap());
        }

        if buf.len() < body_len {
            let vowel = *VOWELS.choose(rng).unwrap();
            buf.push(vowel);

            // Occasional diphthong: a second, different vowel.
            if buf.len() < body_len && rng.gen_bool(0.2) {
                let others: Vec<char> = VOWELS.iter().copied().filter(|v| *v != vowel).collect();
                buf.push(*others.choose(rng).unwrap());
            }
        }

        syllables += 1;
    }

    // The syllable loop can stop short of the body length; keep the
    // consonant/vowel rhythm while filling the rest.
    while buf.len() < body_len {
        let want_consonant = buf.last().map_or(true, |c| VOWELS.contains(c));
        if want_consonant {
            buf.push(*CONSONANTS.choose(rng).unwrap());
        } else {
            buf.push(*VOWELS.choose(rng).unwrap());
        }
    }

    if let Some(first) = buf.first_mut() {
        *first = first.to_ascii_uppercase();
    }
    for i in (3..buf.len()).step_by(3) {
        if rng.gen_bool(0.4) {
            buf[i] = buf[i].to_ascii_uppercase();
        }
    }

    // Insert extras at a random offset 0-2 from the current end,
    // shifting later characters right. Two extras can land at
    // overlapping positions on short buffers; that is fine.
    if reserved >= 1 {
        let digit = char::from(b'0' + rng.gen_range(0..10));
        insert_near_end(rng, &mut buf, digit);
    }
    if reserved >= 2 {
        let symbol = *SYMBOLS.choose(rng).unwrap();
        insert_near_end(rng, &mut buf, symbol);
    }

    buf.truncate(length);
    buf.into_iter().collect()
}

fn insert_near_end<R: Rng>(rng: &mut R, buf: &mut Vec<char>, c: char) {
    let offset = rng.gen_range(0..=2.min(buf.len()));
    let pos = buf.len() - offset;
    buf.insert(pos, c);
}
