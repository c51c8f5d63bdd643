//! Stop word removal for already-tokenized text.
//!
//! The caller supplies sentences as sequences of tokens plus a stop word
//! set; each sentence comes back as a single space-joined string with the
//! stop words dropped. Matching is exact and case-sensitive: no
//! lowercasing, no stemming, no punctuation handling. Tokenization is the
//! caller's job.

pub mod filter;
pub mod stop_words;

pub use filter::{filter_corpus, filter_sentence, par_filter_corpus};
pub use stop_words::{StopWords, StopWordsError};
