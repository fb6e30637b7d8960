//! Decision types shared across the engine: the closed priority set, the
//! collaborator's base classification, and fused decisions.

use serde::{Deserialize, Serialize};

/// Final priority label. Closed set with fixed precedence:
/// critical > high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Lenient parse of a free-text classifier label.
    ///
    /// Case-insensitive; labels outside the closed set map to `Medium`,
    /// the out-of-vocabulary default.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base classification from the external collaborator.
///
/// The label is free text and possibly case-varied; the confidence has
/// already been normalised to `[0, 100]` at the collaborator boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseDecision {
    pub label: String,
    pub confidence: f64,
}

/// Output of a policy ladder: final label plus bounded confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub priority: Priority,
    pub confidence: f64,
}
