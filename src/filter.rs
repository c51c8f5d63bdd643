use rayon::prelude::*;
use tracing::debug;

use crate::stop_words::StopWords;

/// Drop stop word tokens from one sentence and join the survivors with
/// single spaces.
///
/// Surviving tokens keep their relative order. If every token is a stop
/// word, or `tokens` is empty, the result is the empty string. The output
/// never carries leading or trailing whitespace.
pub fn filter_sentence(tokens: &[String], stop_words: &StopWords) -> String {
    let mut sentence = String::new();

    for token in tokens {
        if !stop_words.contains(token) {
            sentence.push_str(token);
            sentence.push(' ');
        }
    }

    // Drop the separator after the last kept token.
    sentence.pop();

    sentence
}

/// Apply [`filter_sentence`] to every sentence of a corpus.
///
/// Sentences are independent; the output has exactly one string per input
/// sentence, in the same order.
pub fn filter_corpus(corpus: &[Vec<String>], stop_words: &StopWords) -> Vec<String> {
    debug!(
        sentences = corpus.len(),
        stop_words = stop_words.len(),
        "removing stop words from corpus"
    );

    corpus
        .iter()
        .map(|tokens| filter_sentence(tokens, stop_words))
        .collect()
}

/// Parallel [`filter_corpus`]. Same contract, same output order.
pub fn par_filter_corpus(corpus: &[Vec<String>], stop_words: &StopWords) -> Vec<String> {
    debug!(
        sentences = corpus.len(),
        stop_words = stop_words.len(),
        "removing stop words from corpus in parallel"
    );

    corpus
        .par_iter()
        .map(|tokens| filter_sentence(tokens, stop_words))
        .collect()
}
