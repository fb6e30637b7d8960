//! Urgency scoring: evaluate the signal rule table against task text.

use tracing::debug;

use crate::rules::{Tier, rule_table};

/// Lower clamp bound for the accumulated urgency score.
pub const URGENCY_FLOOR: f64 = -2.0;
/// Upper clamp bound for the accumulated urgency score.
pub const URGENCY_CEILING: f64 = 5.0;

/// A rule that matched during scoring, recorded in evaluation order.
///
/// Diagnostic output only; decisions branch on the score, never on the
/// match list.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub tier: Tier,
    pub pattern: &'static str,
    pub weight: f64,
}

/// Result of scoring: clamped urgency plus the ordered match list.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Sum of matched weights, clamped to `[URGENCY_FLOOR, URGENCY_CEILING]`.
    pub urgency: f64,
    pub matches: Vec<RuleMatch>,
}

/// Score urgency cues in `text`.
///
/// Lower-cases the input and tests every rule in declaration order — all
/// tiers are always evaluated, with no short-circuit once a higher tier
/// matches. Each matching rule contributes its weight once; a cue present
/// in two tiers contributes from both. The sum is clamped to
/// `[-2, 5]` after all rules have run.
///
/// Deterministic and pure: identical text always yields the same score
/// and match list.
pub fn score(text: &str) -> ScoreBreakdown {
    let lowered = text.to_lowercase();
    let mut sum = 0.0;
    let mut matches = Vec::new();

    for rule in rule_table() {
        if rule.pattern.is_match(&lowered) {
            sum += rule.weight;
            matches.push(RuleMatch {
                tier: rule.tier,
                pattern: rule.pattern.as_str(),
                weight: rule.weight,
            });
        }
    }

    for m in &matches {
        debug!(
            tier = m.tier.as_str(),
            pattern = m.pattern,
            weight = m.weight,
            "urgency signal matched"
        );
    }

    ScoreBreakdown {
        urgency: sum.clamp(URGENCY_FLOOR, URGENCY_CEILING),
        matches,
    }
}
