//! PageRank over the sentence graph
//!
//! The summarizer only depends on the [`RankSolver`] trait, so the power
//! iteration in [`standard::StandardPageRank`] can be swapped for any other
//! eigenvector-centrality routine or a fixed-score stub in tests.

pub mod standard;

use rustc_hash::FxHashMap;

use crate::graph::csr::CsrGraph;

/// Computes one centrality score per node of a CSR graph
pub trait RankSolver {
    /// Rank every node of `graph`; `scores` is indexed by node ID
    fn rank(&self, graph: &CsrGraph) -> PageRankResult;
}

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Map each node token of `graph` to its score
    pub fn into_score_map(self, graph: &CsrGraph) -> FxHashMap<String, f64> {
        graph
            .tokens
            .iter()
            .cloned()
            .zip(self.scores)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::SentenceGraph;

    #[test]
    fn test_top_n_orders_by_score() {
        let result = PageRankResult::new(vec![0.2, 0.5, 0.3], 1, 0.0, true);
        assert_eq!(result.top_n(2), vec![(1, 0.5), (2, 0.3)]);
    }

    #[test]
    fn test_score_out_of_range_is_zero() {
        let result = PageRankResult::new(vec![1.0], 1, 0.0, true);
        assert_eq!(result.score(7), 0.0);
    }

    #[test]
    fn test_into_score_map() {
        let mut graph = SentenceGraph::new();
        let a = graph.get_or_create_node("first sentence");
        let b = graph.get_or_create_node("second sentence");
        graph.set_edge(a, b, 1.0);
        let csr = CsrGraph::from_graph(&graph);

        let map = PageRankResult::new(vec![0.25, 0.75], 3, 0.0, true).into_score_map(&csr);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("first sentence"), Some(&0.25));
        assert_eq!(map.get("second sentence"), Some(&0.75));
    }
}
