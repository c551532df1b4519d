//! Sentiment scoring for agent utterances.
//!
//! The pipeline only needs a single compound polarity score per
//! utterance, so the scorer is a trait the orchestrator takes as an
//! injected handle. The default implementation is a small lexicon
//! scorer; tests substitute fixed-score mocks.

/// Scores an utterance's overall polarity
pub trait SentimentScorer {
    /// Compound polarity score in [-1, 1]; 0.0 for neutral or empty input
    fn compound(&self, utterance: &str) -> f64;
}

/// Token valences for the built-in scorer. Values roughly follow
/// conventional sentiment-lexicon weightings on a [-4, 4] scale.
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("bad", -2.5),
    ("best", 3.2),
    ("better", 1.9),
    ("boring", -1.3),
    ("brilliant", 2.8),
    ("compelling", 1.9),
    ("concern", -1.2),
    ("concerned", -1.4),
    ("confusing", -1.3),
    ("disappointing", -2.2),
    ("doubt", -1.5),
    ("excellent", 2.7),
    ("excited", 2.2),
    ("exciting", 2.2),
    ("fantastic", 2.6),
    ("fascinating", 2.1),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("helpful", 1.8),
    ("impressive", 2.3),
    ("interested", 1.7),
    ("interesting", 1.7),
    ("love", 3.2),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("poor", -2.1),
    ("problem", -1.7),
    ("promising", 1.8),
    ("risky", -1.6),
    ("skeptical", -1.5),
    ("smart", 1.7),
    ("solid", 1.5),
    ("strong", 2.3),
    ("terrible", -2.1),
    ("unclear", -1.1),
    ("useless", -1.8),
    ("vague", -1.2),
    ("weak", -1.9),
    ("wonderful", 2.7),
    ("worried", -1.5),
    ("worse", -2.1),
    ("wrong", -2.1),
];

/// Tokens that flip the valence of the word immediately after them
const NEGATIONS: &[&str] = &["not", "no", "never", "dont", "cant", "wont", "isnt", "didnt"];

/// Lexicon-based compound scorer.
///
/// Sums per-token valences (with single-token negation flipping) and
/// squashes the sum into [-1, 1] with `s / sqrt(s^2 + 15)`, the usual
/// compounding for valence-sum scorers.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    fn valence(token: &str) -> Option<f64> {
        LEXICON
            .binary_search_by(|(word, _)| word.cmp(&token))
            .ok()
            .map(|i| LEXICON[i].1)
    }
}

impl SentimentScorer for LexiconScorer {
    fn compound(&self, utterance: &str) -> f64 {
        let lowered = utterance.to_lowercase();
        let cleaned: String = lowered
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            if let Some(mut valence) = Self::valence(token) {
                if i > 0 && NEGATIONS.contains(&tokens[i - 1]) {
                    valence = -valence;
                }
                sum += valence;
            }
        }

        if sum == 0.0 {
            return 0.0;
        }
        (sum / (sum * sum + 15.0).sqrt()).clamp(-1.0, 1.0)
    }
}
