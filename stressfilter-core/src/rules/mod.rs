//! Exclusion rules for candidate words
//!
//! A word is excluded when any of the fixed rules matches. The rules are
//! pure predicates over a shared [`RuleContext`] and are evaluated in
//! declaration order with short-circuit; they are independent, so the
//! order only affects early exit, never the outcome.
//!
//! - [`endings`]: interrogative particle suffixes and guarded
//!   personal/comparative suffixes
//! - [`interrogative`]: question-word stems at the start of the word
//! - [`stress`]: caller index already on the last vowel

pub mod endings;
pub mod interrogative;
pub mod stress;

pub use endings::{GUARDED_ENDINGS, SIMPLE_ENDINGS};
pub use interrogative::QUESTION_STEMS;

/// Shared view of one word under evaluation.
///
/// Holds the lowercased word both as a string (for literal prefix/suffix
/// matching) and as characters (for position-based vowel checks), plus
/// the caller-supplied stress index.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Lowercased word.
    pub word: &'a str,
    /// Lowercased word as characters; positions are character indices.
    pub chars: &'a [char],
    /// Caller-supplied stress position.
    pub index: i64,
}

/// The exclusion rules, in evaluation order.
const RULES: &[fn(&RuleContext) -> bool] = &[
    endings::matches_simple_ending,
    endings::matches_guarded_ending,
    interrogative::matches_question_stem,
    stress::index_on_last_vowel,
];

/// Decide whether a word matches any exclusion rule.
///
/// Total over any word and any index; comparisons are case-insensitive
/// and the original casing of `word` is never needed here.
pub fn should_exclude(word: &str, index: i64) -> bool {
    let lowered = word.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let ctx = RuleContext {
        word: &lowered,
        chars: &chars,
        index,
    };

    RULES.iter().any(|rule| rule(&ctx))
}
