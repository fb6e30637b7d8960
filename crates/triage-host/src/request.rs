//! Task request input: required text plus advisory metadata.
//!
//! Metadata fields are advisory inputs to scoring, so malformed values
//! coerce to documented defaults (0 hours / not urgent) instead of
//! rejecting the request. Only the task text is validated.

use serde::{Deserialize, Deserializer};
use triage_core::TriageError;

/// A triage request: task text plus optional structured metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRequest {
    /// Free-text task description. Required, non-empty after trimming.
    #[serde(alias = "text")]
    pub task_text: String,

    /// Comma-separated keyword text. Scored alongside the task text on
    /// the fallback path.
    #[serde(default)]
    pub keywords: String,

    /// Estimated effort in hours. Non-negative; malformed values coerce
    /// to 0.
    #[serde(default, deserialize_with = "lenient_hours")]
    pub effort_hours: f64,

    /// Requester's urgency flag. Accepts a boolean or the string
    /// `"true"`; anything else coerces to false.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_urgent: bool,
}

impl TaskRequest {
    /// Build a request from task text with default metadata.
    pub fn new(task_text: impl Into<String>) -> Self {
        Self {
            task_text: task_text.into(),
            keywords: String::new(),
            effort_hours: 0.0,
            is_urgent: false,
        }
    }

    /// Reject empty or whitespace-only task text.
    pub fn validate(&self) -> Result<(), TriageError> {
        if self.task_text.trim().is_empty() {
            return Err(TriageError::EmptyTaskText);
        }
        Ok(())
    }
}

fn lenient_hours<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let hours = match Raw::deserialize(deserializer)? {
        Raw::Num(n) if n.is_finite() => n,
        Raw::Num(_) => 0.0,
        Raw::Text(s) => s.trim().parse().unwrap_or(0.0),
        Raw::Other(_) => 0.0,
    };
    Ok(hours.max(0.0))
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Flag(b) => b,
        Raw::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        Raw::Other(_) => false,
    })
}
