use anyhow::Result;
use tracing::debug;

use crate::llm::{
    PITCH_VOCABULARY, TextGenerator, improvement_prompt, keyword_prompt, missing_elements,
    parse_keyword_list, summary_prompt,
};
use crate::sentiment::SentimentScorer;

/// How improvement feedback is assembled.
///
/// The source had three near-duplicate pipeline variants differing only
/// in whether keyword-gap feedback was included; this option unifies
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackStrategy {
    /// Free-text LLM feedback only
    #[default]
    LlmOnly,
    /// Keyword extraction + vocabulary-gap message, then LLM feedback
    KeywordGap,
}

/// Summarize the user's side of the pitch in 3-4 sentences
pub async fn summarize<G: TextGenerator>(generator: &G, user_turns: &[String]) -> Result<String> {
    let text = user_turns.join(" ");
    let response = generator.generate(&summary_prompt(&text)).await?;
    Ok(response.trim().to_string())
}

/// Average compound sentiment across agent turns.
///
/// Returns exactly 0.0 for an empty turn list without invoking the
/// scorer.
pub fn agent_interest_score<C: SentimentScorer>(scorer: &C, agent_turns: &[String]) -> f64 {
    if agent_turns.is_empty() {
        return 0.0;
    }
    let total: f64 = agent_turns.iter().map(|turn| scorer.compound(turn)).sum();
    total / agent_turns.len() as f64
}

/// Generate improvement feedback for the pitch.
///
/// With `KeywordGap`, first asks the service for the pitch's keywords
/// and reports vocabulary themes none of them cover; always follows
/// with free-text LLM feedback. Service failures propagate and end the
/// run.
pub async fn improvement_feedback<G: TextGenerator>(
    generator: &G,
    user_turns: &[String],
    strategy: FeedbackStrategy,
) -> Result<Vec<String>> {
    let text = user_turns.join(" ");
    let mut feedback = Vec::new();

    if strategy == FeedbackStrategy::KeywordGap {
        let response = generator.generate(&keyword_prompt(&text)).await?;
        let keywords = parse_keyword_list(&response);
        debug!("Extracted {} keywords", keywords.len());

        let missing = missing_elements(PITCH_VOCABULARY, &keywords);
        if !missing.is_empty() {
            feedback.push(format!(
                "The pitch did not appear to cover: {}",
                missing.join(", ")
            ));
        }
    }

    let response = generator.generate(&improvement_prompt(&text)).await?;
    feedback.push(response.trim().to_string());

    Ok(feedback)
}
