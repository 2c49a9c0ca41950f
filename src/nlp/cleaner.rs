//! Sentence splitting and token cleaning
//!
//! Turns raw text into [`Sentence`]s: the original sentence text plus a
//! normalized comparison token (lowercased, punctuation, digits and
//! stopwords removed). Sentences whose token ends up empty are dropped but
//! keep their slot in the index sequence.

use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::FxHashSet;

use super::stopwords::StopwordFilter;
use crate::errors::Result;
use crate::types::Sentence;

/// Produces the ordered sentences of a text
pub trait SentenceSource {
    /// Split and clean `text` into sentences in source order
    fn sentences(&self, text: &str) -> Vec<Sentence>;
}

/// Stopword-aware sentence cleaner
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    stopwords: StopwordFilter,
}

impl TextCleaner {
    /// Create a cleaner using the stopword list of `language`
    pub fn for_language(language: &str) -> Result<Self> {
        Ok(Self {
            stopwords: StopwordFilter::for_language(language)?,
        })
    }

    /// Create a cleaner with an explicit stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Add extra stopwords
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        self.stopwords.add_stopwords(words);
    }

    /// Split `text` into sentences and compute their tokens
    pub fn clean_text_by_sentences(&self, text: &str) -> Vec<Sentence> {
        split_sentences(text)
            .into_iter()
            .enumerate()
            .filter_map(|(index, original)| {
                let token = self.filter_words(&original);
                if token.is_empty() {
                    None
                } else {
                    Some(Sentence::new(original, token, index))
                }
            })
            .collect()
    }

    /// Normalize one sentence into its comparison token
    pub fn filter_words(&self, sentence: &str) -> String {
        let lowered = sentence.to_lowercase();
        let cleaned = strip_numeric(&strip_punctuation(&lowered));

        cleaned
            .split_whitespace()
            .filter(|word| !self.stopwords.is_stopword(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl SentenceSource for TextCleaner {
    fn sentences(&self, text: &str) -> Vec<Sentence> {
        self.clean_text_by_sentences(text)
    }
}

/// Replace every run of ASCII punctuation with a single space
pub fn strip_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c.is_ascii_punctuation() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Remove ASCII digits
fn strip_numeric(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Split text into trimmed sentences
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace or the end of
/// the text, or at a newline. Titles such as `Mr. Smith` and dotted acronyms
/// such as `U.S. Army` do not end a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let protected = abbreviation_breaks(text);
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\n' => Some(i),
            '.' | '!' | '?' => match chars.peek() {
                None => Some(i + c.len_utf8()),
                Some(&(j, next)) if next.is_whitespace() && !protected.contains(&j) => {
                    Some(i + c.len_utf8())
                }
                _ => None,
            },
            _ => None,
        };

        if let Some(end) = end {
            push_fragment(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_fragment(&mut sentences, &text[start..]);

    sentences
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Byte offsets of whitespace that follows an abbreviation
fn abbreviation_breaks(text: &str) -> FxHashSet<usize> {
    static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        [
            // Mr. Smith, Dr. Who, Mrs. Doubtfire
            Regex::new(r"[A-Z][a-z]{1,2}\.(\s)\w").expect("title pattern is valid"),
            // U.S. Army, e.g. this
            Regex::new(r"\.[a-zA-Z]\.(\s)\w").expect("acronym pattern is valid"),
        ]
    });

    patterns
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1).map(|m| m.start()))
        .collect()
}
