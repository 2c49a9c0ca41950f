//! Sentence selection for summarization
//!
//! Sentences are ordered by rank score and cut down either to a fraction of
//! the document (ratio policy) or to roughly a target number of words (word
//! budget policy). The survivors are returned in document order.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::types::Sentence;

/// How many sentences to keep
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionPolicy {
    /// Keep `floor(n * ratio)` of the `n` sentences
    Ratio(f64),
    /// Keep sentences while the running word count approaches the target
    WordCount(usize),
}

impl SelectionPolicy {
    /// Pick the policy: a word budget, when given, overrides the ratio
    pub fn from_options(ratio: f64, words: Option<usize>) -> Self {
        match words {
            Some(words) => SelectionPolicy::WordCount(words),
            None => SelectionPolicy::Ratio(ratio),
        }
    }
}

/// A sentence paired with its rank score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSentence {
    /// The sentence
    pub sentence: Sentence,
    /// PageRank score of the sentence token, 0 if the token was pruned
    pub score: f64,
}

/// Attach rank scores to sentences
///
/// Sentences whose token has no score (the node was pruned) get 0.
pub fn assign_scores(sentences: Vec<Sentence>, scores: &FxHashMap<String, f64>) -> Vec<RankedSentence> {
    sentences
        .into_iter()
        .map(|sentence| {
            let score = scores.get(&sentence.token).copied().unwrap_or(0.0);
            RankedSentence { sentence, score }
        })
        .collect()
}

/// Policy-driven sentence selector
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    policy: SelectionPolicy,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a selector keeping 20% of the sentences
    pub fn new() -> Self {
        Self {
            policy: SelectionPolicy::Ratio(0.2),
        }
    }

    /// Create with an explicit policy
    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    /// Set the ratio policy
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.policy = SelectionPolicy::Ratio(ratio);
        self
    }

    /// Set the word budget policy
    pub fn with_words(mut self, words: usize) -> Self {
        self.policy = SelectionPolicy::WordCount(words);
        self
    }

    /// The active policy
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Select the most important sentences, returned in document order
    ///
    /// Candidates are sorted by score, highest first; equal scores keep their
    /// document order.
    pub fn select(&self, mut sentences: Vec<RankedSentence>) -> Vec<RankedSentence> {
        sentences.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let mut selected = match self.policy {
            SelectionPolicy::Ratio(ratio) => {
                let length = (sentences.len() as f64 * ratio) as usize;
                sentences.truncate(length);
                sentences
            }
            SelectionPolicy::WordCount(words) => select_by_word_count(sentences, words),
        };

        selected.sort_by_key(|s| s.sentence.index);
        selected
    }
}

/// Greedy word budget walk over score-ordered sentences
///
/// Stops at the first sentence whose inclusion would move the running word
/// count strictly farther from the target. Equal distance keeps the sentence.
fn select_by_word_count(sentences: Vec<RankedSentence>, words: usize) -> Vec<RankedSentence> {
    let mut word_count: usize = 0;
    let mut selected = Vec::new();

    for sentence in sentences {
        let with_sentence = word_count.saturating_add(sentence.sentence.word_count());

        if words.abs_diff(with_sentence) > words.abs_diff(word_count) {
            break;
        }

        word_count = with_sentence;
        selected.push(sentence);
    }

    selected
}
