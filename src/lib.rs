//! Stopword filtering for Banglish — romanized (Latin-alphabet) Bangla.
//!
//! Transliterated Bangla has no standard spelling: the same function word
//! appears as "apni", "apnee", "apney", gets stretched for emphasis
//! ("naaaa"), and drags punctuation along. This crate recognizes such tokens
//! against a hand-curated table of known surface forms, with one
//! normalization rule (collapsing runs of a repeated character) closing the
//! gap for emphatic spellings. No probabilistic model, no learned lists.
//!
//! - **Deterministic**: classification depends only on the token and the
//!   static table
//! - **Pure**: no I/O, no mutable state, safe to call from any thread
//! - **Cheap**: O(1) set lookup after O(token length) normalization
//!
//! # Examples
//!
//! ```
//! use banglish_stopwords::StopwordFilter;
//!
//! let filter = StopwordFilter::new();
//!
//! let clean = filter.remove_stopwords(
//!     "Ami r tmi ekhon bhalo achhiiiii, kintu hbeee naaa! apni abar ashen.",
//! );
//! assert_eq!(clean, "bhalo achhiiiii, ashen.");
//! ```

#![warn(missing_docs)]

pub mod filter;
pub mod normalize;
pub mod table;

pub use filter::StopwordFilter;
pub use normalize::{clean_token, collapse_repeats};
pub use table::STOPWORDS;
