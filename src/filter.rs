//! Stopword classification and text filtering.

use rustc_hash::FxHashSet;

use crate::normalize::{clean_token, collapse_repeats};
use crate::table::stopword_set;

/// Filter for Banglish stopwords.
///
/// A zero-sized handle over the process-wide stopword table. Construction is
/// free; the lookup set is built once on first classification and shared by
/// every instance and thread. All methods are pure — classification depends
/// only on the token's content and the static table.
///
/// # Examples
///
/// ```
/// use banglish_stopwords::StopwordFilter;
///
/// let filter = StopwordFilter::new();
/// assert!(filter.is_stopword("apni"));
/// assert!(filter.is_stopword("NAAAA"));
/// assert!(!filter.is_stopword("bhalo"));
///
/// assert_eq!(filter.remove_stopwords("ami bhalo achi"), "bhalo achi");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordFilter;

impl StopwordFilter {
    /// Creates a new filter.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Returns true if `word` is a known stopword surface form.
    ///
    /// The word is lowercased and stripped of leading/trailing ASCII
    /// punctuation, then looked up; on a miss, runs of repeated characters
    /// are collapsed ("naaaa" to "na") and the lookup is retried. Original
    /// punctuation and casing never affect the result beyond that.
    ///
    /// The empty string, and any token that is empty after punctuation
    /// trimming, is never a stopword.
    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let clean = clean_token(word);
        if clean.is_empty() {
            // Punctuation-only token. The table never holds the empty
            // string, but classify explicitly rather than rely on that.
            return false;
        }

        let set = stopword_set();
        if set.contains(clean.as_str()) {
            return true;
        }

        set.contains(collapse_repeats(&clean).as_str())
    }

    /// Removes stopwords from `text`, returning the surviving tokens joined
    /// by single spaces.
    ///
    /// The text is split on runs of whitespace. Each token is classified via
    /// [`is_stopword`](Self::is_stopword); survivors keep their original
    /// casing and attached punctuation, in their original order. Empty input
    /// yields the empty string.
    ///
    /// Because the output is rebuilt by joining, any run of whitespace in
    /// the input becomes a single space in the output. This is a known
    /// quirk kept for compatibility, not a normalization feature.
    #[must_use]
    pub fn remove_stopwords(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.remove_stopwords_into(text, &mut out);
        out
    }

    /// Like [`remove_stopwords`](Self::remove_stopwords), writing into an
    /// existing buffer.
    ///
    /// Clears `out` first and reuses its capacity when sufficient.
    pub fn remove_stopwords_into(&self, text: &str, out: &mut String) {
        out.clear();

        for token in text.split_whitespace() {
            if self.is_stopword(token) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
    }

    /// Read-only view of the complete stopword set.
    ///
    /// The set is shared, immutable, and process-wide; nothing a caller does
    /// with the reference can affect subsequent classification.
    #[must_use]
    pub fn stopwords(&self) -> &'static FxHashSet<&'static str> {
        stopword_set()
    }

    /// Number of distinct stopword surface forms.
    #[must_use]
    pub fn len(&self) -> usize {
        stopword_set().len()
    }

    /// Always false for the embedded table; provided for API convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        stopword_set().is_empty()
    }
}
