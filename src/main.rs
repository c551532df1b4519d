use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use pitchlens::{
    FeedbackStrategy, GeminiClient, GeminiConfig, JsonFileStore, LexiconScorer, Pipeline,
    RecordStore, compute_metrics, extract_turns,
};

#[derive(Parser)]
#[command(name = "pitchlens")]
#[command(author, version, about = "Call-transcript analysis pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: fetch the latest record, compute metrics,
    /// generate insights, persist the analysis
    Run {
        /// Records file (JSON array of call records)
        #[arg(short, long)]
        records: PathBuf,

        /// Analyses file the results are appended to
        #[arg(short, long)]
        analyses: PathBuf,

        /// Generation model name
        #[arg(long, default_value = "gemini-2.5-flash")]
        model: String,

        /// Include keyword-gap feedback alongside the LLM feedback
        #[arg(long)]
        keyword_feedback: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Preprocess the latest record and print its metrics without any
    /// service calls or persistence
    Inspect {
        /// Records file (JSON array of call records)
        #[arg(short, long)]
        records: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            records,
            analyses,
            model,
            keyword_feedback,
            verbose,
        } => {
            setup_logging(verbose);
            run_pipeline(records, analyses, model, keyword_feedback).await
        }
        Commands::Inspect { records, verbose } => {
            setup_logging(verbose);
            inspect_record(records)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn run_pipeline(
    records: PathBuf,
    analyses: PathBuf,
    model: String,
    keyword_feedback: bool,
) -> Result<()> {
    let mut config = GeminiConfig::from_env()?;
    config.model = model;

    let store = JsonFileStore::new(records, analyses);
    let generator = GeminiClient::new(config);
    let scorer = LexiconScorer::new();
    let strategy = if keyword_feedback {
        FeedbackStrategy::KeywordGap
    } else {
        FeedbackStrategy::LlmOnly
    };

    let pipeline = Pipeline::new(store, generator, scorer, strategy);
    let report = pipeline.run().await.context("Pipeline run failed")?;

    if report.analyzed() {
        info!("Analysis complete");
    } else {
        info!("No records to analyze");
    }

    Ok(())
}

fn inspect_record(records: PathBuf) -> Result<()> {
    let store = JsonFileStore::new(records, PathBuf::new());
    let record = store
        .latest_record()
        .context("Failed to fetch latest record")?;

    let Some(record) = record else {
        println!("No records in store.");
        return Ok(());
    };

    let scorer = LexiconScorer::new();
    let turns = extract_turns(record.items(), &scorer);
    let metrics = compute_metrics(&turns, &record);

    println!("Record Inspection");
    println!("=================");
    println!("Call ID: {}", record.call_id().unwrap_or("<none>"));
    match record.timestamp() {
        Some(ts) => println!("Timestamp: {}", ts),
        None => println!("Timestamp: <none>"),
    }
    println!();

    println!("Turns");
    println!("-----");
    println!("User turns: {}", metrics.user_turn_count);
    println!("Agent turns: {}", metrics.agent_turn_count);
    println!("User interruptions: {}", metrics.user_interruptions);
    println!("Agent interruptions: {}", metrics.agent_interruptions);
    println!();

    println!("Metrics");
    println!("-------");
    println!("User word count: {}", metrics.user_word_count);
    println!("Agent word count: {}", metrics.agent_word_count);
    println!(
        "User avg words/turn: {:.1}",
        metrics.user_avg_words_per_turn
    );
    println!(
        "Agent avg words/turn: {:.1}",
        metrics.agent_avg_words_per_turn
    );
    println!("User filler count: {}", metrics.user_filler_count);
    println!("Talk/listen ratio: {:.2}", metrics.talk_listen_ratio);
    println!("Clarity score: {:.2}", metrics.clarity_score);

    Ok(())
}
