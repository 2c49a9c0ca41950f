//! # textrank_summarizer
//!
//! Extractive text summarization with sentence-level TextRank.
//!
//! Sentences are compared by their longest common word subsequence, linked
//! into a weighted similarity graph, ranked with weighted PageRank, and the
//! best ones are returned in their original order.
//!
//! ```no_run
//! use textrank_summarizer::{summarize, SummarizerConfig};
//!
//! let text = std::fs::read_to_string("article.txt").unwrap();
//! let summary = summarize(&text, &SummarizerConfig::new().with_words(50)).unwrap();
//! println!("{}", summary.as_text().unwrap_or_default());
//! ```
//!
//! ## Features
//!
//! - **Deterministic**: identical input and settings give identical output
//! - **Two budgets**: a sentence ratio or an approximate word count
//! - **Pluggable ranking**: any [`RankSolver`] can replace the power iteration
//! - **Parallel**: pairwise similarity runs on rayon for large documents

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{Sentence, Summary, SummarizerConfig};

// Re-export main functionality
pub use graph::{builder::SentenceGraph, csr::CsrGraph};
pub use nlp::{
    cleaner::{SentenceSource, TextCleaner},
    stopwords::StopwordFilter,
};
pub use pagerank::{standard::StandardPageRank, PageRankResult, RankSolver};
pub use summarizer::selector::{RankedSentence, SelectionPolicy, SentenceSelector};
pub use summarizer::similarity::similarity;
pub use summarizer::textrank::{get_graph, summarize, RankReport, Summarizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
