// HTTP classifier clients.
//
// Both pretrained models are consumed as independently-hosted inference
// endpoints with a fixed JSON contract:
//
//   primary (multi-label):  POST {"text": ...} -> {"scores": {label: conf}}
//   secondary (binary):     POST {"text": ...} -> {"label": "toxic"|"not toxic",
//                                                  "confidence": conf}
//
// A non-2xx status, a timeout, or an unparseable body is a hard inference
// failure for that request — no silent fallback to "clean".

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{BinaryToxicityClassifier, BinaryVerdict, LabelScorer, LabelScores};
use super::truncate_chars;

#[derive(Serialize)]
struct InferenceRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct LabelScoresResponse {
    scores: BTreeMap<String, f64>,
}

#[derive(Deserialize)]
struct BinaryResponse {
    label: String,
    confidence: f64,
}

fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client for classifier endpoint")
}

/// Client for the primary multi-label toxicity scorer endpoint.
pub struct HttpLabelScorer {
    client: Client,
    endpoint: String,
}

impl HttpLabelScorer {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl LabelScorer for HttpLabelScorer {
    async fn score(&self, text: &str) -> Result<LabelScores> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { text })
            .send()
            .await
            .context("Failed to call label scorer endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Label scorer returned {}: {}", status, body);
        }

        let parsed: LabelScoresResponse = response
            .json()
            .await
            .context("Failed to parse label scorer response")?;

        debug!(
            labels = parsed.scores.len(),
            text_preview = %truncate_chars(text, 50),
            "Scored text (multi-label)"
        );

        Ok(LabelScores {
            scores: parsed.scores,
        })
    }
}

/// Client for the optional secondary binary toxic/not-toxic endpoint.
pub struct HttpBinaryClassifier {
    client: Client,
    endpoint: String,
}

impl HttpBinaryClassifier {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl BinaryToxicityClassifier for HttpBinaryClassifier {
    async fn classify(&self, text: &str) -> Result<BinaryVerdict> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { text })
            .send()
            .await
            .context("Failed to call binary classifier endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Binary classifier returned {}: {}", status, body);
        }

        let parsed: BinaryResponse = response
            .json()
            .await
            .context("Failed to parse binary classifier response")?;

        debug!(
            label = %parsed.label,
            confidence = parsed.confidence,
            text_preview = %truncate_chars(text, 50),
            "Scored text (binary)"
        );

        Ok(BinaryVerdict {
            label: parsed.label,
            confidence: parsed.confidence,
        })
    }
}
