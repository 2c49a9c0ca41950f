//! Sentence-level TextRank summarizer
//!
//! Stages run strictly forward:
//! 1. Clean: split text into sentences and compute comparison tokens
//! 2. Graph: connect every pair of distinct tokens by LCWS similarity
//! 3. Prune: drop tokens without any similar sentence
//! 4. Rank: weighted PageRank over the pruned graph
//! 5. Select: ratio or word budget policy, back in document order
//! 6. Format: joined text, list of sentences, or scored pairs

use serde::Serialize;

use super::format::format_results;
use super::selector::{assign_scores, RankedSentence, SelectionPolicy, SentenceSelector};
use crate::errors::Result;
use crate::graph::builder::{build_graph_parallel, SentenceGraph};
use crate::graph::csr::CsrGraph;
use crate::nlp::cleaner::{SentenceSource, TextCleaner};
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::RankSolver;
use crate::types::{Sentence, Summary, SummarizerConfig};

/// Enter a tracing span for a summarizer stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Emit a tracing event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

/// Diagnostics from one summarization run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankReport {
    /// Sentences produced by the cleaner
    pub sentences: usize,
    /// Nodes in the similarity graph
    pub nodes: usize,
    /// Undirected edges in the similarity graph
    pub edges: usize,
    /// Nodes removed for having no edges
    pub pruned_nodes: usize,
    /// PageRank iterations performed
    pub iterations: usize,
    /// Whether PageRank converged within the iteration cap
    pub converged: bool,
}

/// Extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer<R = StandardPageRank> {
    config: SummarizerConfig,
    cleaner: TextCleaner,
    solver: R,
}

impl Summarizer<StandardPageRank> {
    /// Create a summarizer from a validated config
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;

        let mut cleaner = TextCleaner::for_language(&config.language)?;
        cleaner.add_stopwords(&config.additional_stopwords);

        let solver = StandardPageRank::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_threshold(config.convergence_threshold);

        Ok(Self {
            config,
            cleaner,
            solver,
        })
    }
}

impl<R: RankSolver> Summarizer<R> {
    /// Replace the ranking routine
    pub fn with_solver<S: RankSolver>(self, solver: S) -> Summarizer<S> {
        Summarizer {
            config: self.config,
            cleaner: self.cleaner,
            solver,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text`
    pub fn summarize(&self, text: &str) -> Summary {
        self.summarize_with_info(text).0
    }

    /// Summarize `text`, also returning graph and convergence diagnostics
    pub fn summarize_with_info(&self, text: &str) -> (Summary, RankReport) {
        let sentences = {
            trace_stage!("clean");
            self.cleaner.sentences(text)
        };
        self.summarize_sentences(sentences)
    }

    /// Summarize sentences produced by any [`SentenceSource`]
    pub fn summarize_sentences(&self, sentences: Vec<Sentence>) -> (Summary, RankReport) {
        let mut report = RankReport {
            sentences: sentences.len(),
            ..RankReport::default()
        };
        trace_event!(debug, sentences = sentences.len(), "cleaned text");

        let graph = {
            trace_stage!("graph");
            self.build_graph(&sentences)
        };
        report.nodes = graph.node_count();
        report.edges = graph.edge_count();
        trace_event!(debug, nodes = report.nodes, edges = report.edges, "built similarity graph");

        let pruned = {
            trace_stage!("prune");
            graph.remove_unreachable_nodes()
        };
        report.pruned_nodes = report.nodes - pruned.node_count();

        if pruned.is_empty() {
            trace_event!(debug, "no similar sentences, returning empty summary");
            report.converged = true;
            return (self.format(Vec::new()), report);
        }

        let scores = {
            trace_stage!("rank");
            let csr = CsrGraph::from_graph(&pruned);
            let result = self.solver.rank(&csr);
            report.iterations = result.iterations;
            report.converged = result.converged;
            if !result.converged {
                trace_event!(
                    warn,
                    iterations = result.iterations,
                    delta = result.delta,
                    "pagerank did not converge, using last estimate"
                );
            }
            result.into_score_map(&csr)
        };

        let selected = {
            trace_stage!("select");
            let policy = SelectionPolicy::from_options(self.config.ratio, self.config.words);
            SentenceSelector::with_policy(policy).select(assign_scores(sentences, &scores))
        };
        trace_event!(debug, selected = selected.len(), "selected sentences");

        (self.format(selected), report)
    }

    /// Build the weighted similarity graph of `text` without pruning or ranking
    pub fn get_graph(&self, text: &str) -> SentenceGraph {
        let sentences = self.cleaner.sentences(text);
        self.build_graph(&sentences)
    }

    fn build_graph(&self, sentences: &[Sentence]) -> SentenceGraph {
        let tokens: Vec<&str> = sentences.iter().map(|s| s.token.as_str()).collect();
        build_graph_parallel(&tokens, self.config.parallel_threshold)
    }

    fn format(&self, selected: Vec<RankedSentence>) -> Summary {
        trace_stage!("format");
        format_results(selected, self.config.split, self.config.scores)
    }
}

/// Summarize `text` with the given config
pub fn summarize(text: &str, config: &SummarizerConfig) -> Result<Summary> {
    Ok(Summarizer::with_config(config.clone())?.summarize(text))
}

/// Build the similarity graph of `text` for inspection
///
/// The graph is weighted but neither pruned nor ranked.
pub fn get_graph(text: &str, language: &str) -> Result<SentenceGraph> {
    let config = SummarizerConfig::new().with_language(language);
    Ok(Summarizer::with_config(config)?.get_graph(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SummarizeError;
    use crate::pagerank::PageRankResult;

    /// Scores nodes by reverse ID so the last node ranks highest
    struct ReverseIdSolver;

    impl RankSolver for ReverseIdSolver {
        fn rank(&self, graph: &CsrGraph) -> PageRankResult {
            let scores = (0..graph.num_nodes).map(|i| (i + 1) as f64).collect();
            PageRankResult::new(scores, 1, 0.0, true)
        }
    }

    const TEXT: &str = "Zebras graze on open grassland plains. \
        Lions hunt zebras on grassland plains at night. \
        Giraffes browse acacia trees. \
        Lions rest during the hot day on grassland.";

    fn summarizer(config: SummarizerConfig) -> Summarizer {
        Summarizer::with_config(config).unwrap()
    }

    #[test]
    fn test_unsupported_language() {
        let err = Summarizer::with_config(SummarizerConfig::new().with_language("xx")).unwrap_err();
        assert!(matches!(err, SummarizeError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Summarizer::with_config(SummarizerConfig::new().with_ratio(2.0)).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_report_counts() {
        let (_, report) = summarizer(SummarizerConfig::new()).summarize_with_info(TEXT);

        assert_eq!(report.sentences, 4);
        assert_eq!(report.nodes, 4);
        // The giraffe sentence shares no words with the others
        assert_eq!(report.pruned_nodes, 1);
        assert!(report.converged);
        assert!(report.iterations > 0);
    }

    #[test]
    fn test_stub_solver_drives_selection() {
        let engine = summarizer(SummarizerConfig::new().with_ratio(0.25)).with_solver(ReverseIdSolver);

        // Pruned graph nodes are sentences 0, 1, 3; the stub ranks the last highest
        assert_eq!(
            engine.summarize(TEXT),
            Summary::Text("Lions rest during the hot day on grassland.".to_string())
        );
    }

    #[test]
    fn test_pruned_sentences_score_zero() {
        let engine = summarizer(SummarizerConfig::new().with_ratio(1.0).with_scores(true));

        let Summary::Scored(scored) = engine.summarize(TEXT) else {
            panic!("expected scored output");
        };

        assert_eq!(scored.len(), 4);
        assert_eq!(scored[2].0, "Giraffes browse acacia trees.");
        assert_eq!(scored[2].1, 0.0);
        assert!(scored.iter().enumerate().all(|(i, (_, s))| i == 2 || *s > 0.0));
    }

    #[test]
    fn test_get_graph_is_unpruned() {
        let graph = summarizer(SummarizerConfig::new()).get_graph(TEXT);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.degree(2), 0);
    }

    #[test]
    fn test_non_convergence_still_summarizes() {
        let config = SummarizerConfig::new()
            .with_ratio(0.5)
            .with_max_iterations(1)
            .with_convergence_threshold(0.0);
        let (summary, report) = summarizer(config).summarize_with_info(TEXT);

        assert!(!report.converged);
        assert_eq!(report.iterations, 1);
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_degenerate_input_reports_empty() {
        let (summary, report) =
            summarizer(SummarizerConfig::new().with_split(true)).summarize_with_info("Hello. Goodbye.");

        assert_eq!(summary, Summary::Sentences(Vec::new()));
        assert_eq!(report.edges, 0);
        assert_eq!(report.iterations, 0);
    }

    #[test]
    fn test_summarize_sentences_from_custom_source() {
        let sentences = vec![
            Sentence::new("Alpha beta gamma.", "alpha beta gamma", 0),
            Sentence::new("Beta gamma delta.", "beta gamma delta", 1),
        ];

        let engine = summarizer(SummarizerConfig::new().with_ratio(1.0).with_split(true));
        let (summary, report) = engine.summarize_sentences(sentences);

        assert_eq!(report.edges, 1);
        assert_eq!(
            summary,
            Summary::Sentences(vec![
                "Alpha beta gamma.".to_string(),
                "Beta gamma delta.".to_string()
            ])
        );
    }
}
