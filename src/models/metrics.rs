use serde::{Deserialize, Serialize};

/// Aggregate conversational metrics for one transcript
///
/// Computed once per record and never mutated afterward. Word counts are
/// always consistent with the turns they were derived from
/// (`word_count = sum of whitespace-split token counts per turn`), and
/// every average defaults to 0 when its turn count is 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptMetrics {
    pub user_word_count: usize,
    pub agent_word_count: usize,
    pub user_turn_count: usize,
    pub agent_turn_count: usize,
    pub user_avg_words_per_turn: f64,
    pub agent_avg_words_per_turn: f64,
    pub user_interruptions: u32,
    pub agent_interruptions: u32,
    pub user_filler_count: u32,
    /// Talk/listen time ratio, or the user/agent word-count ratio when
    /// timing fields are absent
    pub talk_listen_ratio: f64,
    /// Inverse filler-word density; 1 when the user said nothing
    pub clarity_score: f64,
}
