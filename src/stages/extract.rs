use tracing::debug;

use crate::models::{ExtractedTurns, TranscriptItem};
use crate::sentiment::SentimentScorer;
use crate::text::normalize;

/// Extract per-role turns from an ordered transcript.
///
/// For each item the content fragments are joined with a single space,
/// trimmed, and normalized. User turns and agent turns keep their
/// original transcript order. Interrupted agent turns additionally get
/// a compound sentiment score. Items with any other role are skipped.
pub fn extract_turns<C: SentimentScorer>(
    items: &[TranscriptItem],
    scorer: &C,
) -> ExtractedTurns {
    let mut turns = ExtractedTurns::default();

    for item in items {
        let joined = item.content.join(" ");
        let utterance = normalize(joined.trim());

        match item.role.as_str() {
            "user" => {
                turns.user_turns.push(utterance);
                if item.interrupted {
                    turns.user_interruptions += 1;
                }
            }
            "assistant" => {
                if item.interrupted {
                    turns.agent_interruptions += 1;
                    turns.agent_sentiments.push(scorer.compound(&utterance));
                }
                turns.agent_turns.push(utterance);
            }
            other => {
                debug!("Skipping transcript item with role {:?}", other);
            }
        }
    }

    turns
}
