use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Decision
/// policy (thresholds, priority order) is deliberately NOT configurable —
/// those are fixed constants in the moderation module.
pub struct Config {
    /// Endpoint of the primary multi-label toxicity scorer.
    pub label_scorer_url: String,
    /// Endpoint of the optional secondary binary classifier. When unset,
    /// the decision engine runs with the primary scorer only.
    pub binary_classifier_url: Option<String>,
    /// Hard timeout on a single classifier call; expiry is an inference error.
    pub inference_timeout: Duration,
    /// Directory where uploaded post images are written.
    pub upload_dir: PathBuf,
    /// Live-feed poll interval.
    pub poll_interval: Duration,
    /// Optional JSON lexicon file; the built-in lists are used when unset.
    pub lexicon_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let inference_timeout_secs: u64 = match env::var("GATEPOST_INFERENCE_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("GATEPOST_INFERENCE_TIMEOUT_SECS must be an integer, got {v:?}"))?,
            Err(_) => 15,
        };

        let poll_interval_ms: u64 = match env::var("GATEPOST_POLL_INTERVAL_MS") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("GATEPOST_POLL_INTERVAL_MS must be an integer, got {v:?}"))?,
            Err(_) => 1000,
        };

        Ok(Self {
            label_scorer_url: env::var("GATEPOST_LABEL_SCORER_URL").unwrap_or_default(),
            binary_classifier_url: env::var("GATEPOST_BINARY_CLASSIFIER_URL").ok(),
            inference_timeout: Duration::from_secs(inference_timeout_secs),
            upload_dir: env::var("GATEPOST_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./uploads")),
            poll_interval: Duration::from_millis(poll_interval_ms),
            lexicon_path: env::var("GATEPOST_LEXICON_PATH").ok().map(PathBuf::from),
        })
    }

    /// Check that the primary scorer endpoint is configured.
    /// Call this before any operation that needs the decision engine.
    pub fn require_label_scorer(&self) -> Result<()> {
        if self.label_scorer_url.is_empty() {
            anyhow::bail!(
                "GATEPOST_LABEL_SCORER_URL not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
