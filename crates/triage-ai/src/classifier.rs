//! The `Classifier` trait and its wire contract.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use triage_core::BaseDecision;

/// Errors from the classifier collaborator.
///
/// Every variant means the same thing to the orchestrator: the
/// collaborator is unavailable for this request and the fallback policy
/// applies. None of them fail the request.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("malformed classifier response: {0}")]
    Malformed(String),
}

/// Input to the collaborator, serialised to its wire format:
/// `{text, keywords, effort_hours, is_urgent: 0/1}`.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifierInput {
    #[serde(rename = "text")]
    pub task_text: String,
    pub keywords: String,
    pub effort_hours: f64,
    #[serde(serialize_with = "bool_as_int")]
    pub is_urgent: bool,
}

fn bool_as_int<S: serde::Serializer>(v: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*v))
}

/// A collaborator that classifies a task into a base (label, confidence)
/// decision.
///
/// Implementations normalise the reported confidence to `[0, 100]` before
/// returning, so the fusion policy never sees a raw probability.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, input: &ClassifierInput) -> Result<BaseDecision, ClassifierError>;
}

/// Normalise a collaborator confidence to `[0, 100]`.
///
/// Collaborators may report probabilities in `[0, 1]` or percentages in
/// `[0, 100]`; values at or below 1.0 are treated as probabilities and
/// scaled, then the result is clamped.
pub fn normalize_confidence(raw: f64) -> f64 {
    let scaled = if raw <= 1.0 { raw * 100.0 } else { raw };
    scaled.clamp(0.0, 100.0)
}
