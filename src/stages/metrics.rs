use crate::models::{CallRecord, ExtractedTurns, TranscriptMetrics};
use crate::text::is_filler;

/// Total whitespace-split token count across a list of turns
pub fn count_words(turns: &[String]) -> usize {
    turns.iter().map(|t| t.split_whitespace().count()).sum()
}

/// Count filler-word tokens across a list of turns.
///
/// Uses lowercase + whitespace split only, not full normalization, so
/// it can be applied to arbitrary turn text.
pub fn count_filler_words(turns: &[String]) -> u32 {
    turns
        .iter()
        .map(|turn| {
            turn.to_lowercase()
                .split_whitespace()
                .filter(|w| is_filler(w))
                .count() as u32
        })
        .sum()
}

/// Derive aggregate metrics from extracted turns and the source
/// record's timing metadata.
///
/// Every division guards its denominator: averages short-circuit to 0
/// on an empty turn list, ratios substitute 1 for a zero denominator,
/// and the clarity score is 1 when the user said nothing.
pub fn compute_metrics(turns: &ExtractedTurns, record: &CallRecord) -> TranscriptMetrics {
    let user_word_count = count_words(&turns.user_turns);
    let agent_word_count = count_words(&turns.agent_turns);
    let user_turn_count = turns.user_turns.len();
    let agent_turn_count = turns.agent_turns.len();

    let user_avg_words_per_turn = if user_turn_count > 0 {
        user_word_count as f64 / user_turn_count as f64
    } else {
        0.0
    };
    let agent_avg_words_per_turn = if agent_turn_count > 0 {
        agent_word_count as f64 / agent_turn_count as f64
    } else {
        0.0
    };

    let user_filler_count = count_filler_words(&turns.user_turns);

    // Talk/listen ratio from reported times when both are present and
    // nonzero; otherwise fall back to the word-count ratio.
    let talk_listen_ratio = match (record.user_talk_time(), record.user_listen_time()) {
        (Some(talk), Some(listen)) => talk / listen,
        _ => user_word_count as f64 / agent_word_count.max(1) as f64,
    };

    let clarity_score = if user_word_count > 0 {
        1.0 - user_filler_count as f64 / user_word_count as f64
    } else {
        1.0
    };

    TranscriptMetrics {
        user_word_count,
        agent_word_count,
        user_turn_count,
        agent_turn_count,
        user_avg_words_per_turn,
        agent_avg_words_per_turn,
        user_interruptions: turns.user_interruptions,
        agent_interruptions: turns.agent_interruptions,
        user_filler_count,
        talk_listen_ratio,
        clarity_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turns_of(user: &[&str], agent: &[&str]) -> ExtractedTurns {
        ExtractedTurns {
            user_turns: user.iter().map(|s| s.to_string()).collect(),
            agent_turns: agent.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_word_counts_match_turns() {
        let turns = turns_of(
            &["we are building an ai tool", "for sales teams"],
            &["tell me more"],
        );
        let metrics = compute_metrics(&turns, &CallRecord::default());

        let expected: usize = turns
            .user_turns
            .iter()
            .map(|t| t.split_whitespace().count())
            .sum();
        assert_eq!(metrics.user_word_count, expected);
        assert_eq!(metrics.user_word_count, 9);
        assert_eq!(metrics.agent_word_count, 3);
        assert_eq!(metrics.user_turn_count, 2);
        assert_eq!(metrics.agent_turn_count, 1);
        assert_eq!(metrics.user_avg_words_per_turn, 4.5);
        assert_eq!(metrics.agent_avg_words_per_turn, 3.0);
    }

    #[test]
    fn test_empty_transcript_defaults() {
        let metrics = compute_metrics(&ExtractedTurns::default(), &CallRecord::default());

        assert_eq!(metrics.user_word_count, 0);
        assert_eq!(metrics.agent_word_count, 0);
        assert_eq!(metrics.user_turn_count, 0);
        assert_eq!(metrics.agent_turn_count, 0);
        assert_eq!(metrics.user_avg_words_per_turn, 0.0);
        assert_eq!(metrics.agent_avg_words_per_turn, 0.0);
        assert_eq!(metrics.user_filler_count, 0);
        assert_eq!(metrics.clarity_score, 1.0);
        // Fallback ratio with zero agent words substitutes 1
        assert_eq!(metrics.talk_listen_ratio, 0.0);
    }

    #[test]
    fn test_filler_count_on_unnormalized_text() {
        let turns = turns_of(&["Um so we actually ship Basically everything"], &[]);
        let metrics = compute_metrics(&turns, &CallRecord::default());
        // um, so, actually, basically
        assert_eq!(metrics.user_filler_count, 4);
    }

    #[test]
    fn test_clarity_score_bounds() {
        let turns = turns_of(&["um uh like so"], &[]);
        let metrics = compute_metrics(&turns, &CallRecord::default());
        assert_eq!(metrics.clarity_score, 0.0);

        let turns = turns_of(&["we ship rockets"], &[]);
        let metrics = compute_metrics(&turns, &CallRecord::default());
        assert_eq!(metrics.clarity_score, 1.0);
    }

    #[test]
    fn test_talk_listen_ratio_from_times() {
        let record = CallRecord {
            user_talk_time: Some(120.0),
            user_listen_time: Some(60.0),
            ..Default::default()
        };
        // Word counts would give a different ratio; times win
        let turns = turns_of(&["one two three"], &["four"]);
        let metrics = compute_metrics(&turns, &record);
        assert_eq!(metrics.talk_listen_ratio, 2.0);
    }

    #[test]
    fn test_talk_listen_ratio_word_fallback() {
        // Zero listen time counts as absent, so the fallback applies
        let record = CallRecord {
            user_talk_time: Some(120.0),
            user_listen_time: Some(0.0),
            ..Default::default()
        };
        let turns = turns_of(&["one two three four"], &["five six"]);
        let metrics = compute_metrics(&turns, &record);
        assert_eq!(metrics.talk_listen_ratio, 2.0);

        // No agent words at all: denominator substitutes 1
        let turns = turns_of(&["one two three"], &[]);
        let metrics = compute_metrics(&turns, &CallRecord::default());
        assert_eq!(metrics.talk_listen_ratio, 3.0);
    }

    #[test]
    fn test_interruption_counts_carried_through() {
        let turns = ExtractedTurns {
            user_interruptions: 2,
            agent_interruptions: 1,
            ..turns_of(&["hello"], &["hi"])
        };
        let metrics = compute_metrics(&turns, &CallRecord::default());
        assert_eq!(metrics.user_interruptions, 2);
        assert_eq!(metrics.agent_interruptions, 1);
    }
}
