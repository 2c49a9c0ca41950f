//! Weighted PageRank
//!
//! Power iteration where the walk moves from a node to a neighbor with
//! probability proportional to the edge weight, and teleports uniformly with
//! probability `1 - damping`. Mass on dangling nodes is spread uniformly.

use super::{PageRankResult, RankSolver};
use crate::graph::csr::CsrGraph;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta between iterations
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-5,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run weighted PageRank on a graph
    ///
    /// Iterates until the L1 distance between successive score vectors is at
    /// most `threshold` (1e-5 by default) or `max_iterations` is reached. In
    /// the latter case the last estimate is returned with `converged = false`.
    /// Final scores sum to 1.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(Vec::new(), 0, 0.0, true);
        }

        let dangling = graph.dangling_nodes();
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations && delta > self.threshold {
            delta = self.step(graph, &dangling, &scores, &mut next);
            std::mem::swap(&mut scores, &mut next);
            iterations += 1;
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            scores.iter_mut().for_each(|score| *score /= sum);
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }

    /// One power-iteration step from `scores` into `next`, returning the L1 delta
    fn step(&self, graph: &CsrGraph, dangling: &[u32], scores: &[f64], next: &mut [f64]) -> f64 {
        let n = scores.len() as f64;
        let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
        next.fill((1.0 - self.damping) / n + self.damping * dangling_mass / n);

        for (node, &score) in scores.iter().enumerate() {
            let out_weight = graph.node_total_weight(node as u32);
            if out_weight <= 0.0 {
                continue;
            }
            let share = self.damping * score / out_weight;
            for (neighbor, weight) in graph.neighbors(node as u32) {
                next[neighbor as usize] += share * weight;
            }
        }

        scores.iter().zip(next.iter()).map(|(old, new)| (old - new).abs()).sum()
    }
}

impl RankSolver for StandardPageRank {
    fn rank(&self, graph: &CsrGraph) -> PageRankResult {
        self.run(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::SentenceGraph;

    fn build_triangle_graph() -> CsrGraph {
        let mut graph = SentenceGraph::new();
        let a = graph.get_or_create_node("a");
        let b = graph.get_or_create_node("b");
        let c = graph.get_or_create_node("c");

        graph.set_edge(a, b, 1.0);
        graph.set_edge(b, c, 1.0);
        graph.set_edge(c, a, 1.0);

        CsrGraph::from_graph(&graph)
    }

    fn build_star_graph() -> CsrGraph {
        // Hub connected to 3 spokes
        let mut graph = SentenceGraph::new();
        let hub = graph.get_or_create_node("hub");
        let s1 = graph.get_or_create_node("s1");
        let s2 = graph.get_or_create_node("s2");
        let s3 = graph.get_or_create_node("s3");

        graph.set_edge(hub, s1, 1.0);
        graph.set_edge(hub, s2, 1.0);
        graph.set_edge(hub, s3, 1.0);

        CsrGraph::from_graph(&graph)
    }

    #[test]
    fn test_triangle_graph_equal_scores() {
        let graph = build_triangle_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let graph = build_star_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_edge_weights_shift_rank() {
        // Path a - b - c where b-c is much heavier than a-b
        let mut graph = SentenceGraph::new();
        let a = graph.get_or_create_node("a");
        let b = graph.get_or_create_node("b");
        let c = graph.get_or_create_node("c");
        graph.set_edge(a, b, 1.0);
        graph.set_edge(b, c, 5.0);

        let result = StandardPageRank::new().run(&CsrGraph::from_graph(&graph));

        assert!(result.scores[c as usize] > result.scores[a as usize]);
        assert!(result.scores[b as usize] > result.scores[c as usize]);
    }

    #[test]
    fn test_disconnected_components_converge() {
        let mut graph = SentenceGraph::new();
        let a = graph.get_or_create_node("a");
        let b = graph.get_or_create_node("b");
        let c = graph.get_or_create_node("c");
        let d = graph.get_or_create_node("d");
        graph.set_edge(a, b, 1.0);
        graph.set_edge(c, d, 1.0);

        let result = StandardPageRank::new().run(&CsrGraph::from_graph(&graph));

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = StandardPageRank::new().run(&build_star_graph());

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&build_star_graph());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();

        // Lower damping = more teleportation = more uniform scores
        let result_low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let result_high = StandardPageRank::new().with_damping(0.95).run(&graph);

        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }

    #[test]
    fn test_stops_at_l1_threshold() {
        let loose = StandardPageRank::new().with_threshold(1e-2).run(&build_star_graph());
        let tight = StandardPageRank::new().run(&build_star_graph());

        assert!(loose.converged && tight.converged);
        assert!(loose.delta <= 1e-2);
        assert!(tight.delta <= 1e-5);
        assert!(loose.iterations <= tight.iterations);
    }

    #[test]
    fn test_rank_solver_trait_object() {
        let solver: Box<dyn RankSolver> = Box::new(StandardPageRank::new());
        let result = solver.rank(&build_triangle_graph());
        assert_eq!(result.scores.len(), 3);
    }
}
