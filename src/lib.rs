pub mod llm;
pub mod models;
pub mod pipeline;
pub mod sentiment;
pub mod stages;
pub mod store;
pub mod text;

pub use llm::{GeminiClient, GeminiConfig, TextGenerator};
pub use models::{AnalysisRecord, CallRecord, ExtractedTurns, TranscriptItem, TranscriptMetrics};
pub use pipeline::{Pipeline, RunReport};
pub use sentiment::{LexiconScorer, SentimentScorer};
pub use stages::{
    FeedbackStrategy, agent_interest_score, compute_metrics, extract_turns, improvement_feedback,
    summarize,
};
pub use store::{JsonFileStore, MemoryStore, RecordStore, StoreError};
pub use text::{FILLER_WORDS, normalize};
