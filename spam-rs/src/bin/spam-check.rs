//! CLI tool for scoring a single message
//!
//! # Usage
//!
//! ```bash
//! # Score with the seed lexicon
//! spam-check --subject "FREE CASH" --body "Click now"
//!
//! # Recalibrate from a labeled CSV first, print JSON
//! spam-check --subject "Hi" --body "Lunch?" --train emails.csv --json
//! ```

use clap::Parser;
use spam_rs::spam::{SpamConfig, SpamScorer, TrainingCorpus};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spam-check")]
#[command(about = "Score an e-mail with the heuristic spam engine", long_about = None)]
struct Cli {
    /// Message subject
    #[arg(short, long, default_value = "")]
    subject: String,

    /// Message body
    #[arg(short, long, default_value = "")]
    body: String,

    /// Labeled CSV corpus used to recalibrate the lexicon before scoring
    #[arg(short, long)]
    train: Option<PathBuf>,

    /// Text column of the corpus (detected by name when omitted)
    #[arg(long)]
    text_column: Option<String>,

    /// Label column of the corpus (detected by name when omitted)
    #[arg(long)]
    label_column: Option<String>,

    /// Score above which a message is spam
    #[arg(long, default_value_t = 0.5)]
    threshold: f64,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "spam_check=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut scorer = SpamScorer::new(SpamConfig {
        spam_threshold: cli.threshold,
        ..SpamConfig::default()
    });

    if let Some(path) = &cli.train {
        let corpus = TrainingCorpus::from_csv_path(path)?;
        let summary = scorer.recalibrate_with_columns(
            &corpus,
            cli.text_column.as_deref(),
            cli.label_column.as_deref(),
        )?;
        info!(
            "Recalibrated from {} ({} spam / {} ham)",
            path.display(),
            summary.spam_count,
            summary.ham_count
        );
    }

    let result = scorer.score(&cli.subject, &cli.body)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let verdict = if result.is_spam { "SPAM" } else { "HAM" };
        println!(
            "{} (score {:.3}, confidence {:.2}%)",
            verdict, result.spam_score, result.confidence
        );
        if result.using_custom_lexicon {
            println!("Lexicon recalibrated from corpus");
        }
    }

    Ok(())
}
