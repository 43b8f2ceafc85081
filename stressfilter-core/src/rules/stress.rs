//! Last-vowel stress rule

use super::RuleContext;
use crate::alphabet::last_vowel_index;

/// Rule: the caller-supplied index points at the last vowel of the word.
///
/// A word with no vowels has no last-vowel position, so this rule never
/// fires for it regardless of the index.
pub fn index_on_last_vowel(ctx: &RuleContext) -> bool {
    matches!(last_vowel_index(ctx.chars), Some(pos) if pos as i64 == ctx.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(word: &str, index: i64) -> bool {
        let chars: Vec<char> = word.chars().collect();
        index_on_last_vowel(&RuleContext {
            word,
            chars: &chars,
            index,
        })
    }

    #[test]
    fn test_index_on_last_vowel_fires() {
        assert!(eval("ҡалам", 3));
    }

    #[test]
    fn test_index_elsewhere_does_not_fire() {
        assert!(!eval("ҡалам", 1));
        assert!(!eval("ҡалам", 4));
        assert!(!eval("ҡалам", -1));
    }

    #[test]
    fn test_glide_is_not_the_last_vowel() {
        // last nucleus of "тау" is the 'а' at position 1, not the final 'у'
        assert!(eval("тау", 1));
        assert!(!eval("тау", 2));
    }

    #[test]
    fn test_vowelless_word_never_fires() {
        assert!(!eval("ткт", 0));
        assert!(!eval("ткт", -1));
        assert!(!eval("", 0));
    }
}
