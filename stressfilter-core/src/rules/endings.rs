//! Suffix-based exclusion rules

use super::RuleContext;
use crate::alphabet::is_vowel_at;

/// Interrogative particle endings that exclude a word unconditionally.
pub const SIMPLE_ENDINGS: &[&str] = &["мо", "ме", "мө", "мы"];

/// Personal and comparative endings that exclude a word only when the
/// character before the suffix is not a vowel. Declaration order matters:
/// the first textual match decides whether to fire or to move on.
pub const GUARDED_ENDINGS: &[&str] = &[
    "боҙ", "беҙ", "быҙ", "бөҙ", "мен", "мөн", "мон", "мын", "һең", "һөң", "һоң", "һың", "һегеҙ",
    "һөгөҙ", "һоғоҙ", "һығыҙ", "са", "сә",
];

/// Rule: the word ends with an interrogative particle.
pub fn matches_simple_ending(ctx: &RuleContext) -> bool {
    SIMPLE_ENDINGS
        .iter()
        .any(|ending| ctx.word.ends_with(ending))
}

/// Rule: the word ends with a guarded suffix not preceded by a vowel.
///
/// For each suffix in declaration order: if the word ends with it, look at
/// the character just before the suffix. No such character (the suffix
/// covers the whole word) or a consonant fires the rule; a vowel lets the
/// remaining suffixes be tried instead.
pub fn matches_guarded_ending(ctx: &RuleContext) -> bool {
    for ending in GUARDED_ENDINGS {
        if !ctx.word.ends_with(ending) {
            continue;
        }

        let suffix_len = ending.chars().count();
        let preceding = ctx
            .chars
            .len()
            .checked_sub(suffix_len)
            .and_then(|pos| pos.checked_sub(1));

        match preceding {
            Some(pos) if is_vowel_at(ctx.chars, pos) => continue,
            _ => return true,
        }
    }

    false
}
