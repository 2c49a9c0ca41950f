//! Summarization components
//!
//! Sentence similarity, ranking-driven sentence selection and output
//! formatting for extractive TextRank summaries.

pub mod format;
pub mod selector;
pub mod similarity;
pub mod textrank;
