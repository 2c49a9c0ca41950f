//! Graph construction and representation
//!
//! This module provides the sentence similarity graph, its pruning, and
//! the CSR layout consumed by PageRank.

pub mod builder;
pub mod csr;
