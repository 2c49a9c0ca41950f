//! Natural Language Processing components
//!
//! This module provides sentence splitting, token cleaning and stopword filtering.

pub mod cleaner;
pub mod stopwords;
