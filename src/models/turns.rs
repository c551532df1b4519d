use serde::{Deserialize, Serialize};

/// Turns extracted from a transcript, split by speaker role
///
/// Ordering within each role preserves the original transcript order;
/// relative order across roles is discarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedTurns {
    /// Normalized user utterances
    pub user_turns: Vec<String>,
    /// Normalized agent (assistant) utterances
    pub agent_turns: Vec<String>,
    /// Compound sentiment scores for interrupted agent turns
    pub agent_sentiments: Vec<f64>,
    /// Number of user turns flagged as interrupted
    pub user_interruptions: u32,
    /// Number of agent turns flagged as interrupted
    pub agent_interruptions: u32,
}
