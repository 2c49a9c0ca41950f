//! Core data types shared across the summarizer

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizeError};

/// A sentence produced by the sentence cleaner
///
/// `token` is the normalized comparison form (lowercased, punctuation and
/// stop words removed) and serves as the graph node identity. Two sentences
/// with the same token share one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Original sentence text
    pub text: String,
    /// Normalized comparison form
    pub token: String,
    /// 0-based position among the split sentences of the source text
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, token: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            token: token.into(),
            index,
        }
    }

    /// Whitespace-delimited word count of the original text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Configuration for summarization
///
/// Deserializes from JSON with every field optional:
///
/// ```json
/// { "ratio": 0.3, "language": "en", "scores": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Fraction of sentences kept when `words` is not set
    pub ratio: f64,
    /// Target word count; overrides `ratio` when present
    pub words: Option<usize>,
    /// Language used for sentence cleaning
    pub language: String,
    /// Return a list of sentences instead of joined text
    pub split: bool,
    /// Return `(text, score)` pairs; takes precedence over `split`
    pub scores: bool,
    /// PageRank damping factor
    pub damping: f64,
    /// Maximum PageRank iterations
    pub max_iterations: usize,
    /// PageRank convergence threshold (L1 delta)
    pub convergence_threshold: f64,
    /// Extra stop words merged into the language list
    pub additional_stopwords: Vec<String>,
    /// Node count from which pairwise similarity runs in parallel
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ratio: 0.2,
            words: None,
            language: "english".to_string(),
            split: false,
            scores: false,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-5,
            additional_stopwords: Vec::new(),
            parallel_threshold: 64,
        }
    }
}

impl SummarizerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the selection ratio
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the word budget
    pub fn with_words(mut self, words: usize) -> Self {
        self.words = Some(words);
        self
    }

    /// Set the language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Return a list of sentences
    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    /// Return `(text, score)` pairs
    pub fn with_scores(mut self, scores: bool) -> Self {
        self.scores = scores;
        self
    }

    /// Set the PageRank damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the PageRank iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the PageRank convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Add extra stop words
    pub fn with_additional_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_stopwords
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the node count from which graph building runs in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Check that every numeric setting is in range
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.ratio) {
            return Err(SummarizeError::invalid_config(
                "ratio",
                format!("must be within [0, 1], got {}", self.ratio),
            ));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SummarizeError::invalid_config(
                "damping",
                format!("must be within (0, 1), got {}", self.damping),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config(
                "max_iterations",
                "must be greater than 0",
            ));
        }
        if !(self.convergence_threshold >= 0.0) {
            return Err(SummarizeError::invalid_config(
                "convergence_threshold",
                format!("must be non-negative, got {}", self.convergence_threshold),
            ));
        }
        Ok(())
    }
}

/// Formatted summarization output
///
/// Serializes untagged: a JSON string, an array of strings, or an array of
/// `[text, score]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Summary {
    /// Selected sentences joined with `\n`
    Text(String),
    /// Selected sentences as a list
    Sentences(Vec<String>),
    /// Selected sentences with their rank scores
    Scored(Vec<(String, f64)>),
}

impl Summary {
    /// Check whether no sentence was selected
    pub fn is_empty(&self) -> bool {
        match self {
            Summary::Text(text) => text.is_empty(),
            Summary::Sentences(sentences) => sentences.is_empty(),
            Summary::Scored(scored) => scored.is_empty(),
        }
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        match self {
            Summary::Text(text) if text.is_empty() => 0,
            Summary::Text(text) => text.lines().count(),
            Summary::Sentences(sentences) => sentences.len(),
            Summary::Scored(scored) => scored.len(),
        }
    }

    /// The joined text, if this is a `Text` summary
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Summary::Text(text) => Some(text),
            _ => None,
        }
    }
}
