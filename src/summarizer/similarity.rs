//! Sentence similarity
//!
//! Two sentences are compared by the length of their longest common word
//! subsequence (LCWS), normalized by the log of both sentence lengths:
//!
//! `similarity = lcws(A, B) / (log10(|A|) + log10(|B|))`
//!
//! The coefficient is symmetric and non-negative. It is 0 when either
//! sentence has no words or when the denominator is 0 (two one-word
//! sentences).

use crate::nlp::cleaner::strip_punctuation;

/// Similarity coefficient between two sentences
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let a = sentence_words(s1);
    let b = sentence_words(s2);
    words_similarity(&a, &b)
}

/// Similarity coefficient between two pre-split word sequences
pub fn words_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let denominator = (a.len() as f64).log10() + (b.len() as f64).log10();
    if denominator == 0.0 {
        return 0.0;
    }

    lcws_length(a, b) as f64 / denominator
}

/// Lowercase, strip punctuation and split into words
pub fn sentence_words(sentence: &str) -> Vec<String> {
    strip_punctuation(&sentence.to_lowercase())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Length of the longest common subsequence of two word sequences
///
/// Standard LCS dynamic program over words, keeping only two rows of the
/// `(|a|+1) x (|b|+1)` table.
pub fn lcws_length<S: AsRef<str>>(a: &[S], b: &[S]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for x in a {
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = if x.as_ref() == y.as_ref() {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
