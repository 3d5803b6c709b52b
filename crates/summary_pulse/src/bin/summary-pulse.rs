use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use summary_history::{HistoryStore, SessionHistory, SummaryResult};
use summary_pulse::{
    embedding::EmbeddingError,
    gemini::GeminiClient,
    text::{tokenize, Language},
    tracing::init_tracing_subscriber,
    types::{LocalStyle, RemoteStyle, SummaryMode, SummaryRequest},
    SummarySessionBuilder, TextRankSummarizer,
};

#[derive(Parser)]
#[command(
    name = "summary-pulse",
    about = "Text summarizer with a local ranking path and a hosted-model path"
)]
struct Cli {
    /// Read the input text from this file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Write the session history export to this file after a successful run
    #[arg(long, global = true)]
    export_history: Option<PathBuf>,

    /// Gemini API key (remote mode only)
    #[arg(long, env = "GEMINI_API_KEY", global = true)]
    api_key: Option<String>,

    /// Remote request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize by ranking sentences locally
    Local {
        /// Summary style
        #[arg(long, value_enum, default_value = "balanced")]
        style: LocalStyleArg,

        /// Fraction of sentences to keep
        #[arg(long, default_value_t = 0.4)]
        ratio: f32,

        /// Words to look up in the per-request embedding model; defaults to
        /// the first three words of the summary
        #[arg(long)]
        similar: Vec<String>,

        /// Neighbors to show per looked-up word
        #[arg(long, default_value_t = 3)]
        top_n: usize,
    },
    /// Summarize via the hosted Gemini model
    Remote {
        /// Summary style
        #[arg(long, value_enum, default_value = "concise")]
        style: RemoteStyleArg,

        /// Target length as a fraction of the original
        #[arg(long, default_value_t = 0.5)]
        length: f32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocalStyleArg {
    Concise,
    Balanced,
    Detailed,
}

impl From<LocalStyleArg> for LocalStyle {
    fn from(style: LocalStyleArg) -> Self {
        match style {
            LocalStyleArg::Concise => LocalStyle::Concise,
            LocalStyleArg::Balanced => LocalStyle::Balanced,
            LocalStyleArg::Detailed => LocalStyle::Detailed,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RemoteStyleArg {
    Concise,
    Brief,
    Detailed,
}

impl From<RemoteStyleArg> for RemoteStyle {
    fn from(style: RemoteStyleArg) -> Self {
        match style {
            RemoteStyleArg::Concise => RemoteStyle::Concise,
            RemoteStyleArg::Brief => RemoteStyle::Brief,
            RemoteStyleArg::Detailed => RemoteStyle::Detailed,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let raw_text = read_input(cli.input.as_deref())?;

    let gemini = GeminiClient::with_timeout(
        cli.api_key.clone().unwrap_or_default(),
        Duration::from_secs(cli.timeout_secs),
    );

    let mut session = SummarySessionBuilder::new()
        .local_summarizer(TextRankSummarizer::new(Language::English))
        .remote_summarizer(gemini)
        .history(SessionHistory::new())
        .build();

    match &cli.command {
        Command::Local {
            style,
            ratio,
            similar,
            top_n,
        } => {
            let request = SummaryRequest::new(raw_text.clone(), *ratio);
            let mode = SummaryMode::Local {
                style: (*style).into(),
            };

            match session.produce_summary(&request, mode).await {
                Ok(result) => {
                    print_summary(&result);
                    show_similar_words(
                        session.train_embedding_model(&raw_text),
                        &result.summary_text,
                        similar,
                        *top_n,
                    );
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Remote { style, length } => {
            if cli.api_key.as_deref().map_or(true, str::is_empty) {
                anyhow::bail!("GEMINI_API_KEY must be set for remote summarization");
            }

            let request = SummaryRequest::new(raw_text.clone(), *length);
            let mode = SummaryMode::Remote {
                style: (*style).into(),
            };

            match session.produce_summary(&request, mode).await {
                Ok(result) => print_summary(&result),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }

    if let Some(path) = &cli.export_history {
        match session.history().export_text() {
            Some(text) => {
                std::fs::write(path, text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("History exported to {}", path.display());
            }
            None => tracing::warn!("No history available to export"),
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

fn print_summary(result: &SummaryResult) {
    println!("Summary:");
    println!("{}", result.summary_text);
    println!();
    println!("Word count: {}", result.word_count);
}

fn show_similar_words(
    model: Result<summary_pulse::embedding::SentenceModel, summary_pulse::SummaryError>,
    summary_text: &str,
    requested: &[String],
    top_n: usize,
) {
    let model = match model {
        Ok(model) => model,
        // Input too small to train on is informational, not a failure.
        Err(e) => {
            println!();
            println!("{e}");
            return;
        }
    };

    let probes: Vec<String> = if requested.is_empty() {
        tokenize::words(summary_text).into_iter().take(3).collect()
    } else {
        requested.to_vec()
    };

    println!();
    for word in &probes {
        match model.most_similar(word, top_n) {
            Ok(neighbors) => {
                println!("Words similar to '{word}':");
                for (neighbor, score) in neighbors {
                    println!("- {neighbor} (score: {score:.2})");
                }
            }
            Err(e @ EmbeddingError::UnknownWord(_)) => println!("{e}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
