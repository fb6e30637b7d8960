//! Static catalog of urgency cues: tiered (pattern, weight) pairs.
//!
//! Pure configuration. Tiers document where a signal sits on the priority
//! ladder; membership does not gate evaluation — the scorer walks every
//! rule in every tier, in declaration order. Weights are tunable here
//! without touching the scorer or the policies.

use once_cell::sync::Lazy;
use regex::Regex;

/// Signal tier. Override precedence is fixed:
/// critical > high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Critical,
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A single urgency cue: a compiled pattern and its signed weight.
#[derive(Debug)]
pub struct Rule {
    pub tier: Tier,
    pub pattern: Regex,
    pub weight: f64,
}

/// Rule definitions, grouped by tier in declaration order.
///
/// Patterns are matched against lower-cased text, so alternations and
/// word-boundary tokens are written lowercase — `\basap\b` matches
/// "ASAP:" once the input is lower-cased.
const RULE_DEFS: &[(Tier, &str, f64)] = &[
    // Critical signals
    (Tier::Critical, r"security.*?(issue|breach|vulnerability)", 3.0),
    (Tier::Critical, r"production.*?(down|offline|broken)", 3.0),
    (Tier::Critical, r"urgent.*?customer.*?(blocked|impacted)", 3.0),
    (Tier::Critical, r"critical.*?(bug|issue|error)", 3.0),
    (Tier::Critical, r"emergency", 3.0),
    (Tier::Critical, r"\basap\b", 3.0),
    // High priority signals
    (Tier::High, r"\b(urgent|important)\b", 2.0),
    (Tier::High, r"deadline.*?(today|tomorrow)", 2.0),
    (Tier::High, r"customer.*?(bug|issue|problem)", 2.0),
    (Tier::High, r"(fix|solve).*?(bug|issue)", 2.0),
    (Tier::High, r"today", 2.0),
    (Tier::High, r"meeting.*?(client|customer)", 2.0),
    // Medium priority signals
    (Tier::Medium, r"\b(needed|required)\b", 1.0),
    (Tier::Medium, r"soon|next week", 1.0),
    (Tier::Medium, r"this week", 1.0),
    (Tier::Medium, r"update.*?(needed|required)", 1.0),
    (Tier::Medium, r"submission", 1.0),
    (Tier::Medium, r"homework|assignment", 1.0),
    // Low priority signals (negative weights reduce priority)
    (Tier::Low, r"\b(whenever convenient|when possible|if time)\b", -2.0),
    (Tier::Low, r"\b(low priority|no rush|not urgent)\b", -2.0),
    (Tier::Low, r"\b(someday|eventually|sometime)\b", -1.5),
    (Tier::Low, r"\b(documentation|nice to have|optional)\b", -1.0),
    (Tier::Low, r"\bcan wait\b", -1.5),
    (Tier::Low, r"whenever.*?time", -2.0),
];

/// The process-wide rule table, compiled once on first use.
///
/// Read-only after initialisation; safe to share across concurrent
/// evaluations without coordination.
pub fn rule_table() -> &'static [Rule] {
    static TABLE: Lazy<Vec<Rule>> = Lazy::new(|| {
        RULE_DEFS
            .iter()
            .map(|&(tier, pattern, weight)| Rule {
                tier,
                pattern: Regex::new(pattern).expect("rule pattern must compile"),
                weight,
            })
            .collect()
    });
    &TABLE
}
