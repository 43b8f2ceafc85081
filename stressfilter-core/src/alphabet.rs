//! Bashkir vowel tables and contextual vowel classification
//!
//! The Bashkir alphabet has eleven vowel letters, two of which ('ү' and
//! 'у') behave as glides when they stand next to another vowel and only
//! count as syllable nuclei otherwise. All classification in this module
//! is case-insensitive and operates on character positions, never byte
//! offsets.

/// Vowels that are always counted as syllable nuclei.
pub const REGULAR_VOWELS: &[char] = &['а', 'ә', 'о', 'ө', 'ы', 'и', 'э', 'е', 'я', 'ю'];

/// Vowels whose status depends on their neighbors ('ү' and 'у').
pub const SPECIAL_VOWELS: &[char] = &['ү', 'у'];

fn to_lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Check if a character is an unconditional vowel (case-insensitive).
#[inline]
pub fn is_regular_vowel(ch: char) -> bool {
    REGULAR_VOWELS.contains(&to_lower(ch))
}

/// Check if a character is a context-dependent vowel (case-insensitive).
#[inline]
pub fn is_special_vowel(ch: char) -> bool {
    SPECIAL_VOWELS.contains(&to_lower(ch))
}

/// Decide whether the character at `pos` counts as a vowel in context.
///
/// Regular vowels always qualify. The special vowels 'ү' and 'у' qualify
/// only when no immediately adjacent character is a regular vowel; next to
/// one they act as glides and are not nuclei. A special vowel at a word
/// edge checks just the neighbor that exists. Out-of-range positions and
/// non-vowel characters return `false`.
pub fn is_vowel_at(chars: &[char], pos: usize) -> bool {
    let Some(&ch) = chars.get(pos) else {
        return false;
    };

    if is_regular_vowel(ch) {
        return true;
    }

    if is_special_vowel(ch) {
        if pos > 0 && is_regular_vowel(chars[pos - 1]) {
            return false;
        }
        if pos + 1 < chars.len() && is_regular_vowel(chars[pos + 1]) {
            return false;
        }
        return true;
    }

    false
}

/// Find the position of the last contextual vowel in the word.
///
/// Returns `None` when no character qualifies (an all-consonant or empty
/// word).
pub fn last_vowel_index(chars: &[char]) -> Option<usize> {
    (0..chars.len()).rev().find(|&i| is_vowel_at(chars, i))
}
