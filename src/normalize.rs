//! Token normalization pipeline.
//!
//! Banglish has no standard orthography, so the same semantic word shows up
//! in many surface forms: casing varies, punctuation sticks to tokens, and
//! writers stretch words for emphasis ("naaaa" for "na"). Classification
//! runs tokens through a short pipeline of total string functions before the
//! table lookup:
//!
//! 1. [`clean_token`] — trim ASCII punctuation from both ends, lowercase
//! 2. [`collapse_repeats`] — squeeze runs of a repeated character to one
//!
//! Each stage is pure and independently testable. Non-ASCII punctuation and
//! mixed-script input are undefined/best-effort: such characters simply pass
//! through untouched.

/// Lowercases a token and trims leading/trailing ASCII punctuation.
///
/// The punctuation set is exactly [`char::is_ascii_punctuation`]. Interior
/// punctuation is preserved ("r-o" stays "r-o"); a token made entirely of
/// punctuation cleans to the empty string.
#[must_use]
pub fn clean_token(word: &str) -> String {
    // Punctuation has no case, so trimming first saves an allocation.
    word.trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}

/// Collapses every run of 2+ identical consecutive characters to one.
///
/// Applies to all characters, not just vowels: "naaaa" becomes "na",
/// "onekkk" becomes "onek", "hmm" becomes "hm". Purely syntactic — it can
/// merge a legitimate doubled-letter word onto a different word, which is an
/// accepted tradeoff of the heuristic.
#[must_use]
pub fn collapse_repeats(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev: Option<char> = None;

    for ch in word.chars() {
        if prev != Some(ch) {
            out.push(ch);
            prev = Some(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_lowercases() {
        assert_eq!(clean_token("Ami"), "ami");
        assert_eq!(clean_token("NAAAA"), "naaaa");
    }

    #[test]
    fn clean_trims_edge_punctuation() {
        assert_eq!(clean_token("apni,"), "apni");
        assert_eq!(clean_token("!!naa!"), "naa");
        assert_eq!(clean_token("\"kintu\""), "kintu");
    }

    #[test]
    fn clean_keeps_interior_punctuation() {
        assert_eq!(clean_token("r-o"), "r-o");
        assert_eq!(clean_token("kokhon-o"), "kokhon-o");
    }

    #[test]
    fn clean_punctuation_only_is_empty() {
        assert_eq!(clean_token("..."), "");
        assert_eq!(clean_token("!?"), "");
    }

    #[test]
    fn clean_empty_is_empty() {
        assert_eq!(clean_token(""), "");
    }

    #[test]
    fn clean_non_ascii_punctuation_passes_through() {
        // Undefined/best-effort territory: only ASCII punctuation is trimmed.
        assert_eq!(clean_token("«na»"), "«na»");
    }

    #[test]
    fn collapse_squeezes_runs() {
        assert_eq!(collapse_repeats("naaaa"), "na");
        assert_eq!(collapse_repeats("onekkk"), "onek");
        assert_eq!(collapse_repeats("achhiiiii"), "achi");
    }

    #[test]
    fn collapse_applies_to_all_characters() {
        assert_eq!(collapse_repeats("hmm"), "hm");
        assert_eq!(collapse_repeats("1100"), "10");
        assert_eq!(collapse_repeats("--a--"), "-a-");
    }

    #[test]
    fn collapse_no_runs_is_identity() {
        assert_eq!(collapse_repeats("bhalo"), "bhalo");
        assert_eq!(collapse_repeats("a"), "a");
        assert_eq!(collapse_repeats(""), "");
    }

    #[test]
    fn collapse_is_char_wise_not_byte_wise() {
        assert_eq!(collapse_repeats("ααβ"), "αβ");
    }

    #[test]
    fn collapse_is_idempotent() {
        for s in ["naaaa", "bhalo", "hmm", "aabbaabb"] {
            let once = collapse_repeats(s);
            assert_eq!(collapse_repeats(&once), once);
        }
    }

    #[test]
    fn pipeline_order_matches_classification() {
        // clean then collapse, the order the filter uses
        assert_eq!(collapse_repeats(&clean_token("NAAAA!")), "na");
        assert_eq!(collapse_repeats(&clean_token("onekkk,")), "onek");
    }
}
