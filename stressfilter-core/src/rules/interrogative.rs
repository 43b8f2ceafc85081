//! Question-word exclusion rule

use super::RuleContext;

/// Interrogative stems; any word starting with one is excluded.
pub const QUESTION_STEMS: &[&str] = &[
    "кем", "ниндәй", "нисек", "ҡайҙа", "ниңә", "нисә", "ҡасан", "ҡайһы", "ҡайҙан", "нишләп",
    "нимә",
];

/// Rule: the word starts with a question-word stem.
pub fn matches_question_stem(ctx: &RuleContext) -> bool {
    QUESTION_STEMS.iter().any(|stem| ctx.word.starts_with(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        matches_question_stem(&RuleContext {
            word,
            chars: &chars,
            index: 0,
        })
    }

    #[test]
    fn test_bare_stem_matches() {
        assert!(eval("кем"));
        assert!(eval("ҡайҙа"));
    }

    #[test]
    fn test_derived_form_matches() {
        assert!(eval("кемдер"));
        assert!(eval("ниңәлер"));
    }

    #[test]
    fn test_stem_elsewhere_in_word_does_not_match() {
        // prefix match only
        assert!(!eval("әкем"));
    }

    #[test]
    fn test_plain_word_does_not_match() {
        assert!(!eval("ҡалам"));
        assert!(!eval(""));
    }
}
