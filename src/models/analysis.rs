use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{TimestampScalar, TranscriptMetrics};

/// The analysis document persisted at the end of a pipeline run
///
/// Created once per run and never mutated. Carries the source record's
/// identity, the LLM-generated insights, and the metrics subset the
/// original analysis collection stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Unique identifier for this analysis
    pub analysis_id: String,
    /// Call identifier from the source record, if present
    pub call_id: Option<String>,
    /// Source record timestamp, flattened through any `$date` wrapper
    pub timestamp: Option<TimestampScalar>,
    /// When this analysis was generated (RFC 3339, UTC)
    pub generated_at: String,
    /// LLM summary of the pitch
    pub summary: String,
    /// Average compound sentiment across agent turns
    pub agent_interest_score: f64,
    /// Improvement feedback: missing-elements message (if any) plus
    /// free-text LLM feedback
    pub feedback: Vec<String>,
    pub clarity_score: f64,
    pub user_filler_count: u32,
    pub talk_listen_ratio: f64,
}

impl AnalysisRecord {
    /// Assemble an analysis record from a run's outputs
    pub fn new(
        call_id: Option<String>,
        timestamp: Option<TimestampScalar>,
        summary: String,
        agent_interest_score: f64,
        feedback: Vec<String>,
        metrics: &TranscriptMetrics,
    ) -> Self {
        Self {
            analysis_id: uuid::Uuid::new_v4().to_string(),
            call_id,
            timestamp,
            generated_at: Utc::now().to_rfc3339(),
            summary,
            agent_interest_score,
            feedback,
            clarity_score: metrics.clarity_score,
            user_filler_count: metrics.user_filler_count,
            talk_listen_ratio: metrics.talk_listen_ratio,
        }
    }
}
