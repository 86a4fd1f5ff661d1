use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use gatepost::classifier::http::{HttpBinaryClassifier, HttpLabelScorer};
use gatepost::classifier::traits::BinaryToxicityClassifier;
use gatepost::config::Config;
use gatepost::lexicon::Lexicon;
use gatepost::moderation::{DecisionEngine, Status};

/// Gatepost: content-moderation demo.
///
/// Classifies short text submissions as clean or flagged using a banned-term
/// lexicon plus pretrained toxicity classifiers, and serves a mini social
/// feed with a live event stream.
#[derive(Parser)]
#[command(name = "gatepost", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Port to listen on (default: 5000)
        #[arg(long, default_value = "5000")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },

    /// Moderate a single piece of text and print the verdict
    Check {
        /// The text to classify
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gatepost=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let engine = Arc::new(build_engine(&config)?);
            info!("Starting server");
            gatepost::web::run_server(config, engine, port, &bind).await?;
        }

        Commands::Check { text } => {
            let config = Config::load()?;
            let engine = build_engine(&config)?;
            let result = engine.decide(&text).await?;

            let status = match result.status {
                Status::Flagged => "FLAGGED".red().bold(),
                Status::Clean => "CLEAN".green().bold(),
            };
            println!("{status}  (signal: {})", result.triggering_signal.as_str());
            if !result.matched_terms.is_empty() {
                println!("matched terms: {}", result.matched_terms.join(", "));
            }
            for (label, confidence) in &result.classifier_scores {
                println!("  {label}: {confidence:.3}");
            }
        }
    }

    Ok(())
}

/// Assemble the decision engine from configuration: lexicon (built-in or
/// file-based) plus the HTTP classifier clients.
fn build_engine(config: &Config) -> Result<DecisionEngine> {
    config.require_label_scorer()?;

    let lexicon = match &config.lexicon_path {
        Some(path) => Lexicon::from_file(path)?,
        None => Lexicon::builtin(),
    };
    info!(terms = lexicon.len(), "Lexicon loaded");

    let primary = Box::new(HttpLabelScorer::new(
        &config.label_scorer_url,
        config.inference_timeout,
    )?);

    let secondary = match &config.binary_classifier_url {
        Some(url) => Some(Box::new(HttpBinaryClassifier::new(
            url,
            config.inference_timeout,
        )?) as Box<dyn BinaryToxicityClassifier>),
        None => None,
    };

    Ok(DecisionEngine::new(lexicon, primary, secondary))
}
