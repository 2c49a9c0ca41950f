//! Result formatting

use super::selector::RankedSentence;
use crate::types::Summary;

/// Render selected sentences
///
/// `scores` wins over `split`: scored output is always a list of
/// `(text, score)` pairs. Otherwise `split` yields a list of texts and the
/// default joins the texts with `\n`.
pub fn format_results(selected: Vec<RankedSentence>, split: bool, scores: bool) -> Summary {
    if scores {
        return Summary::Scored(
            selected
                .into_iter()
                .map(|s| (s.sentence.text, s.score))
                .collect(),
        );
    }

    let texts: Vec<String> = selected.into_iter().map(|s| s.sentence.text).collect();
    if split {
        Summary::Sentences(texts)
    } else {
        Summary::Text(texts.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    fn selection() -> Vec<RankedSentence> {
        vec![
            RankedSentence {
                sentence: Sentence::new("First.", "first", 0),
                score: 0.6,
            },
            RankedSentence {
                sentence: Sentence::new("Third.", "third", 2),
                score: 0.4,
            },
        ]
    }

    #[test]
    fn test_joined_text() {
        assert_eq!(
            format_results(selection(), false, false),
            Summary::Text("First.\nThird.".to_string())
        );
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            format_results(selection(), true, false),
            Summary::Sentences(vec!["First.".to_string(), "Third.".to_string()])
        );
    }

    #[test]
    fn test_scores_win_over_split() {
        let expected = Summary::Scored(vec![("First.".to_string(), 0.6), ("Third.".to_string(), 0.4)]);
        assert_eq!(format_results(selection(), true, true), expected);
        assert_eq!(format_results(selection(), false, true), expected);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(format_results(Vec::new(), false, false), Summary::Text(String::new()));
        assert_eq!(format_results(Vec::new(), true, false), Summary::Sentences(Vec::new()));
        assert_eq!(format_results(Vec::new(), false, true), Summary::Scored(Vec::new()));
    }
}
