//! Priority decision-fusion engine.
//!
//! Scores urgency cues in free-text task descriptions against a tiered
//! signal rule table, then fuses the score with a base classification
//! (label + confidence) from an external classifier into a final, bounded,
//! deterministic priority decision. A reduced fallback policy covers
//! requests for which no classifier output exists.

pub mod decision;
pub mod error;
pub mod policy;
pub mod rules;
pub mod score;

pub use decision::{BaseDecision, Decision, Priority};
pub use error::TriageError;
pub use policy::{FallbackDecision, fallback, fuse};
pub use rules::{Rule, Tier, rule_table};
pub use score::{RuleMatch, ScoreBreakdown, URGENCY_CEILING, URGENCY_FLOOR, score};
