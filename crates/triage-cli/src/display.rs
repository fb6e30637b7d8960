//! Human-readable card display for predictions and matched signals.

use triage_core::ScoreBreakdown;
use triage_host::Prediction;

/// Print a prediction as a vertical card.
pub fn print_prediction_card(p: &Prediction) {
    println!("=== {} ===", p.priority.as_str().to_uppercase());
    println!("  {:<18} {:.1}%", "confidence", p.confidence);
    println!("  {:<18} {:+.1}", "urgency score", p.urgency_score);
    println!("  {:<18} {}", "base prediction", p.base_prediction);
    println!("  {:<18} {:.1}%", "base confidence", p.base_confidence);
    println!(
        "  {:<18} {}",
        "fallback",
        if p.fallback { "yes" } else { "no" }
    );
}

/// Print the urgency signals that matched during scoring.
pub fn print_signals(breakdown: &ScoreBreakdown) {
    if breakdown.matches.is_empty() {
        println!("\nNo urgency signals matched.");
        return;
    }

    println!("\nMatched urgency signals:");
    for m in &breakdown.matches {
        println!("  - {}: {} ({:+.1})", m.tier.as_str(), m.pattern, m.weight);
    }
}
