//! HTTP client for an external classifier service.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};
use triage_core::BaseDecision;

use crate::classifier::{Classifier, ClassifierError, ClassifierInput, normalize_confidence};

/// HTTP classifier client for a model server exposing `POST /predict`.
pub struct HttpClassifier {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct PredictResponse {
    /// Some model servers name this field `prediction`.
    #[serde(alias = "prediction")]
    label: String,
    confidence: f64,
}

impl HttpClassifier {
    /// Create a client for the given model server base URL.
    ///
    /// `base_url` should be like `http://localhost:5000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, input: &ClassifierInput) -> Result<BaseDecision, ClassifierError> {
        let url = format!("{}/predict", self.base_url);

        debug!(url = %url, "requesting base classification");
        let resp = self.client.post(&url).json(input).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClassifierError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PredictResponse = resp
            .json()
            .await
            .map_err(|e| ClassifierError::Malformed(e.to_string()))?;

        let confidence = normalize_confidence(parsed.confidence);
        info!(label = %parsed.label, confidence, "base classification received");
        Ok(BaseDecision {
            label: parsed.label,
            confidence,
        })
    }
}
