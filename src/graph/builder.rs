//! Sentence similarity graph
//!
//! Nodes are distinct sentence tokens interned to `u32` ids; edges carry the
//! LCWS similarity of their endpoints. The adjacency is kept symmetric and
//! never stores self-loops or zero weights.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::summarizer::similarity::{sentence_words, words_similarity};

/// A node in the sentence graph
#[derive(Debug, Clone)]
pub struct GraphNode {
    /// The sentence token for this node
    pub token: String,
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl GraphNode {
    /// Create a new node
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// Undirected weighted graph over sentence tokens
#[derive(Debug, Clone, Default)]
pub struct SentenceGraph {
    /// Maps token -> node ID
    token_to_id: FxHashMap<String, u32>,
    /// Node storage, in insertion order
    nodes: Vec<GraphNode>,
}

impl SentenceGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            token_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given token, returning its ID
    pub fn get_or_create_node(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.token_to_id.get(token) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.token_to_id.insert(token.to_string(), id);
        self.nodes.push(GraphNode::new(token));
        id
    }

    /// Set the weight of the undirected edge between two nodes
    ///
    /// Self-loops and zero weights are ignored; a zero weight means no edge.
    pub fn set_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || weight == 0.0 {
            return;
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            node.edges.insert(to, weight);
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            node.edges.insert(from, weight);
        }
    }

    /// Build the similarity graph for a sequence of sentence tokens
    ///
    /// Duplicate tokens collapse to one node. Every unordered pair of
    /// distinct nodes is compared once.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut graph = Self::with_nodes(tokens);
        graph.connect_all();
        graph
    }

    /// Score every unordered pair of nodes and store the non-zero edges
    fn connect_all(&mut self) {
        let words = self.node_words();
        let n = self.node_count();

        for i in 0..n {
            for j in (i + 1)..n {
                let weight = words_similarity(&words[i], &words[j]);
                self.set_edge(i as u32, j as u32, weight);
            }
        }
    }

    /// Create the node set without any edges
    fn with_nodes<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut graph = Self::with_capacity(tokens.len());
        for token in tokens {
            graph.get_or_create_node(token.as_ref());
        }
        graph
    }

    /// Pre-split words of every node token, indexed by node ID
    fn node_words(&self) -> Vec<Vec<String>> {
        self.nodes.iter().map(|n| sentence_words(&n.token)).collect()
    }

    /// Copy of the graph without nodes that have no edges
    ///
    /// Surviving nodes keep their relative order and are re-numbered densely.
    pub fn remove_unreachable_nodes(&self) -> Self {
        let mut pruned = Self::new();
        let mut remap: FxHashMap<u32, u32> = FxHashMap::default();

        for (id, node) in self.nodes() {
            if !node.edges.is_empty() {
                remap.insert(id, pruned.get_or_create_node(&node.token));
            }
        }

        for (from, to, weight) in self.edges() {
            if let (Some(&a), Some(&b)) = (remap.get(&from), remap.get(&to)) {
                pruned.set_edge(a, b, weight);
            }
        }

        pruned
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&GraphNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by token
    pub fn get_node_id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    /// Get the token for a node ID
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.token.as_str())
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &GraphNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Iterate over node tokens in ID order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.token.as_str())
    }

    /// All undirected edges as `(from, to, weight)` with `from < to`, sorted
    pub fn edges(&self) -> Vec<(u32, u32, f64)> {
        let mut edges: Vec<_> = self
            .nodes()
            .flat_map(|(from, node)| {
                node.edges
                    .iter()
                    .filter(move |&(&to, _)| from < to)
                    .map(move |(&to, &weight)| (from, to, weight))
            })
            .collect();
        edges.sort_by_key(|&(from, to, _)| (from, to));
        edges
    }

    /// Check whether two tokens are connected
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Weight of the edge between two tokens, if any
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.get_node_id(a)?;
        let b = self.get_node_id(b)?;
        self.get_node(a)?.edges.get(&b).copied()
    }

    /// Number of neighbors of a node
    pub fn degree(&self, id: u32) -> usize {
        self.get_node(id).map_or(0, |n| n.edges.len())
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the similarity graph, comparing pairs in parallel for large inputs
///
/// Produces exactly the graph [`SentenceGraph::from_tokens`] would: pair
/// weights are computed on the rayon pool and inserted in pair order.
pub fn build_graph_parallel<S: AsRef<str> + Sync>(tokens: &[S], threshold: usize) -> SentenceGraph {
    let mut graph = SentenceGraph::with_nodes(tokens);
    let n = graph.node_count();

    // For small inputs, sequential is faster
    if n < threshold.max(2) {
        graph.connect_all();
        return graph;
    }

    let words = graph.node_words();

    let rows: Vec<Vec<(u32, f64)>> = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .filter_map(|j| {
                    let weight = words_similarity(&words[i], &words[j]);
                    (weight != 0.0).then_some((j as u32, weight))
                })
                .collect()
        })
        .collect();

    for (i, row) in rows.into_iter().enumerate() {
        for (j, weight) in row {
            graph.set_edge(i as u32, j, weight);
        }
    }

    graph
}
