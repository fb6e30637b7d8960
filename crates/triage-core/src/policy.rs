//! Decision policies: the fusion ladder over (base decision, urgency) and
//! the reduced fallback ladder over text alone.
//!
//! The fusion ladder is an ordered list of overlapping conditions and the
//! order is part of the contract: later, broader branches (medium/low)
//! must not fire once an earlier, more specific tier has matched. Branch
//! bodies keep the exact confidence arithmetic, including each branch's
//! own floor/ceiling.

use tracing::debug;

use crate::decision::{BaseDecision, Decision, Priority};
use crate::score::score;

/// Outcome of the fallback policy: decision plus the urgency that drove it.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackDecision {
    pub priority: Priority,
    pub confidence: f64,
    pub urgency: f64,
}

/// Fuse the collaborator's base decision with the urgency score.
///
/// First matching branch wins. Label checks are substring containment on
/// the lower-cased base label, not on the task text. Total over its
/// domain: every (label, confidence, urgency) triple lands in exactly one
/// branch.
pub fn fuse(base: &BaseDecision, urgency: f64) -> Decision {
    let label = base.label.trim().to_lowercase();
    let conf = base.confidence;

    // 1. Strong negative signals force low regardless of the base label.
    if urgency <= -2.0 {
        debug!(urgency, "strong negative signals, forcing low");
        return Decision {
            priority: Priority::Low,
            confidence: (conf - 10.0).clamp(60.0, 80.0),
        };
    }

    // 2. Critical: overwhelming urgency, or a customer-facing defect label.
    if urgency >= 3.0
        || ((label.contains("bug") || label.contains("error")) && label.contains("customer"))
    {
        return Decision {
            priority: Priority::Critical,
            confidence: (conf + 15.0).min(98.0),
        };
    }

    // 3. High: strong urgency, or a defect label with any positive urgency.
    if urgency >= 1.5 || (label.contains("bug") && urgency > 0.0) {
        return Decision {
            priority: Priority::High,
            confidence: (conf + 10.0).min(90.0),
        };
    }

    // 4. Medium: mild urgency or an explicit medium label. The guard on
    //    critical/high labels is inherited from the original ladder; a
    //    guarded-out label falls through to the default branch.
    if (urgency > 0.0 || label == "medium") && label != "critical" && label != "high" {
        return Decision {
            priority: Priority::Medium,
            confidence: (conf + 5.0).min(85.0),
        };
    }

    // 5. Low: mild negative urgency, documentation work, or an explicit
    //    low label. Same guard as branch 4.
    if (urgency <= -1.0 || label.contains("documentation") || label == "low")
        && label != "critical"
        && label != "high"
    {
        return Decision {
            priority: Priority::Low,
            confidence: (conf + 5.0).min(85.0),
        };
    }

    // 6. Documentation updates hedged with "whenever" phrasing.
    if label.contains("update") && label.contains("documentation") && label.contains("whenev") {
        return Decision {
            priority: Priority::Low,
            confidence: (conf + 10.0).min(85.0),
        };
    }

    // 7. Pass the base label through with capped confidence.
    Decision {
        priority: Priority::from_label(&label),
        confidence: conf.min(75.0),
    }
}

/// Reduced, self-contained ladder for when no classifier output exists.
///
/// Scores the given text (the orchestrator concatenates keyword text onto
/// the task text on this path), then maps the urgency straight to a
/// label. Never reduces to low and never inspects a base label — there
/// is none.
pub fn fallback(text: &str) -> FallbackDecision {
    let urgency = score(text).urgency;
    let lowered = text.to_lowercase();

    let (priority, confidence) = if urgency >= 2.5 {
        (Priority::Critical, 75.0)
    } else if urgency >= 1.5 {
        (Priority::High, 70.0)
    } else if lowered.contains("bug") || lowered.contains("fix") {
        (Priority::High, 65.0)
    } else {
        (Priority::Medium, 60.0)
    };

    FallbackDecision {
        priority,
        confidence,
        urgency,
    }
}
