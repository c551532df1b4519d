use anyhow::{Context, Result};
use tracing::info;

use crate::llm::TextGenerator;
use crate::models::AnalysisRecord;
use crate::sentiment::SentimentScorer;
use crate::stages::{
    FeedbackStrategy, agent_interest_score, compute_metrics, extract_turns, improvement_feedback,
    summarize,
};
use crate::store::RecordStore;

/// Outcome of a single pipeline run
#[derive(Debug)]
pub struct RunReport {
    /// The persisted analysis, or `None` when the store had no records
    pub analysis: Option<AnalysisRecord>,
}

impl RunReport {
    pub fn analyzed(&self) -> bool {
        self.analysis.is_some()
    }
}

/// Sequential analysis pipeline: Fetch, Preprocess, Analyze, Persist,
/// Report.
///
/// All collaborators are injected and live for the run. One record per
/// run: the single most-recently-timestamped record in the store. An
/// empty store is not an error; a failed service call or persist is
/// fatal and propagates.
pub struct Pipeline<S, G, C> {
    store: S,
    generator: G,
    scorer: C,
    strategy: FeedbackStrategy,
}

impl<S, G, C> Pipeline<S, G, C>
where
    S: RecordStore,
    G: TextGenerator,
    C: SentimentScorer,
{
    pub fn new(store: S, generator: G, scorer: C, strategy: FeedbackStrategy) -> Self {
        Self {
            store,
            generator,
            scorer,
            strategy,
        }
    }

    /// Run the pipeline once
    pub async fn run(&self) -> Result<RunReport> {
        // Fetch
        let record = self
            .store
            .latest_record()
            .context("Failed to fetch latest record")?;

        let Some(record) = record else {
            info!("No records in store, nothing to analyze");
            return Ok(RunReport { analysis: None });
        };
        info!("Fetched record, call_id={:?}", record.call_id());

        // Preprocess
        let turns = extract_turns(record.items(), &self.scorer);
        let metrics = compute_metrics(&turns, &record);
        info!(
            "Extracted {} user turns, {} agent turns",
            metrics.user_turn_count, metrics.agent_turn_count
        );

        // Analyze (strictly sequential service calls)
        let summary = summarize(&self.generator, &turns.user_turns).await?;
        let interest_score = agent_interest_score(&self.scorer, &turns.agent_turns);
        let feedback =
            improvement_feedback(&self.generator, &turns.user_turns, self.strategy).await?;
        info!("Generated summary and {} feedback entries", feedback.len());

        // Persist
        let analysis = AnalysisRecord::new(
            record.call_id().map(|id| id.to_string()),
            record.timestamp().cloned(),
            summary,
            interest_score,
            feedback,
            &metrics,
        );
        self.store
            .insert_analysis(&analysis)
            .context("Failed to persist analysis record")?;
        info!("Persisted analysis {}", analysis.analysis_id);

        // Report
        print_report(&analysis);

        Ok(RunReport {
            analysis: Some(analysis),
        })
    }
}

/// Print each computed field for human inspection. Free-form output,
/// no schema guarantee.
fn print_report(analysis: &AnalysisRecord) {
    println!("Call ID: {}", analysis.call_id.as_deref().unwrap_or("<none>"));
    match &analysis.timestamp {
        Some(ts) => println!("Timestamp: {}", ts),
        None => println!("Timestamp: <none>"),
    }
    println!("Summary: {}", analysis.summary);
    println!("Agent Interest Score: {}", analysis.agent_interest_score);
    println!("Feedback:");
    for entry in &analysis.feedback {
        println!("  - {}", entry);
    }
    println!("Clarity Score: {}", analysis.clarity_score);
    println!("User Filler Count: {}", analysis.user_filler_count);
    println!("Talk/Listen Ratio: {}", analysis.talk_listen_ratio);
    println!("{}", "-".repeat(40));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::models::{CallRecord, TimestampField, TimestampScalar, Transcript, TranscriptItem};
    use crate::store::MemoryStore;

    struct ScriptedGenerator {
        responses: RefCell<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(responses: &[&str]) -> Self {
            Self {
                responses: RefCell::new(responses.iter().rev().map(|s| s.to_string()).collect()),
            }
        }
    }

    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.responses
                .borrow_mut()
                .pop()
                .ok_or_else(|| anyhow::anyhow!("no scripted response left"))
        }
    }

    struct FixedScorer(f64);

    impl SentimentScorer for FixedScorer {
        fn compound(&self, _utterance: &str) -> f64 {
            self.0
        }
    }

    fn sample_record() -> CallRecord {
        CallRecord {
            transcript: Transcript {
                items: vec![
                    TranscriptItem {
                        role: "user".to_string(),
                        content: vec!["Um, so basically we are building an AI tool".to_string()],
                        interrupted: false,
                    },
                    TranscriptItem {
                        role: "assistant".to_string(),
                        content: vec!["That sounds interesting".to_string()],
                        interrupted: false,
                    },
                ],
            },
            call_id: Some("call-42".to_string()),
            timestamp: Some(TimestampField::Scalar(TimestampScalar::Number(1000.0))),
            user_talk_time: Some(120.0),
            user_listen_time: Some(60.0),
        }
    }

    #[tokio::test]
    async fn test_full_run_persists_analysis() {
        let store = MemoryStore::new(vec![sample_record()]);
        let generator = ScriptedGenerator::new(&["A fine pitch.", "Add numbers."]);
        let pipeline = Pipeline::new(store, generator, FixedScorer(0.4), FeedbackStrategy::LlmOnly);

        let report = pipeline.run().await.unwrap();

        assert!(report.analyzed());
        let analysis = report.analysis.unwrap();
        assert_eq!(analysis.call_id.as_deref(), Some("call-42"));
        assert_eq!(analysis.timestamp, Some(TimestampScalar::Number(1000.0)));
        assert_eq!(analysis.summary, "A fine pitch.");
        assert_eq!(analysis.agent_interest_score, 0.4);
        assert_eq!(analysis.feedback, vec!["Add numbers."]);
        // Normalized user turn has 7 words and no fillers left
        assert_eq!(analysis.user_filler_count, 0);
        assert_eq!(analysis.clarity_score, 1.0);
        assert_eq!(analysis.talk_listen_ratio, 2.0);

        let store = pipeline.store;
        assert_eq!(store.analyses().len(), 1);
        assert_eq!(store.analyses()[0].analysis_id, analysis.analysis_id);
    }

    #[tokio::test]
    async fn test_empty_store_runs_no_stages() {
        let store = MemoryStore::default();
        // Any service call would fail the run; an empty store must not
        // reach one
        let generator = ScriptedGenerator::new(&[]);
        let pipeline = Pipeline::new(store, generator, FixedScorer(0.0), FeedbackStrategy::LlmOnly);

        let report = pipeline.run().await.unwrap();

        assert!(!report.analyzed());
        assert_eq!(pipeline.store.analyses().len(), 0);
    }

    #[tokio::test]
    async fn test_generator_failure_is_fatal() {
        let store = MemoryStore::new(vec![sample_record()]);
        // Summary succeeds, feedback call has nothing scripted
        let generator = ScriptedGenerator::new(&["A fine pitch."]);
        let pipeline = Pipeline::new(store, generator, FixedScorer(0.0), FeedbackStrategy::LlmOnly);

        assert!(pipeline.run().await.is_err());
        assert_eq!(pipeline.store.analyses().len(), 0);
    }
}
