//! Request orchestration: validate input, obtain a base decision from the
//! classifier collaborator when one is available, and fuse — or fall back
//! — into the final bounded prediction.

mod request;
pub use request::TaskRequest;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use triage_ai::{Classifier, ClassifierInput};
use triage_core::{Priority, TriageError, fallback, fuse, score};

/// Final prediction rendered for the caller.
///
/// Confidence and urgency are rounded to one decimal. `base_prediction`
/// echoes the collaborator's label, or equals the final priority when no
/// collaborator output existed; `fallback` is true on the degraded path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub priority: Priority,
    pub confidence: f64,
    pub urgency_score: f64,
    pub base_prediction: String,
    pub base_confidence: f64,
    pub fallback: bool,
}

impl Prediction {
    /// Neutral default for callers that must degrade instead of failing:
    /// medium priority at confidence 60 with zero urgency.
    pub fn neutral() -> Self {
        Self {
            priority: Priority::Medium,
            confidence: 60.0,
            urgency_score: 0.0,
            base_prediction: Priority::Medium.as_str().to_string(),
            base_confidence: 60.0,
            fallback: true,
        }
    }
}

/// Round to one decimal place for response rendering.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Orchestrates a triage request end to end.
///
/// Holds the classifier as an injected capability with an explicit
/// available/unavailable state; the engine itself never learns about the
/// collaborator's health.
pub struct Orchestrator {
    classifier: Option<Arc<dyn Classifier>>,
}

impl Orchestrator {
    /// Orchestrator with a classifier collaborator.
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    /// Orchestrator without a collaborator; every request takes the
    /// fallback path.
    pub fn without_classifier() -> Self {
        Self { classifier: None }
    }

    /// Whether a classifier collaborator is configured.
    pub fn classifier_available(&self) -> bool {
        self.classifier.is_some()
    }

    /// Run a request through the engine.
    ///
    /// Empty task text is rejected. Collaborator failures are recovered
    /// by switching to the fallback policy; they never fail the request.
    pub async fn predict(&self, request: &TaskRequest) -> Result<Prediction, TriageError> {
        request.validate()?;

        let base = match &self.classifier {
            Some(classifier) => {
                let input = ClassifierInput {
                    task_text: request.task_text.clone(),
                    keywords: request.keywords.clone(),
                    effort_hours: request.effort_hours.max(0.0),
                    is_urgent: request.is_urgent,
                };
                match classifier.classify(&input).await {
                    Ok(base) => Some(base),
                    Err(err) => {
                        warn!(error = %err, "classifier unavailable, switching to fallback policy");
                        None
                    }
                }
            }
            None => None,
        };

        let prediction = match base {
            Some(base) => {
                // Fusion scores the task text alone; keyword text only
                // feeds the collaborator.
                let breakdown = score(&request.task_text);
                let decision = fuse(&base, breakdown.urgency);
                info!(
                    priority = decision.priority.as_str(),
                    urgency = breakdown.urgency,
                    base_label = %base.label,
                    "fused decision"
                );
                Prediction {
                    priority: decision.priority,
                    confidence: round1(decision.confidence),
                    urgency_score: round1(breakdown.urgency),
                    base_prediction: base.label,
                    base_confidence: round1(base.confidence),
                    fallback: false,
                }
            }
            None => {
                let text = fallback_text(&request.task_text, &request.keywords);
                let outcome = fallback(&text);
                info!(
                    priority = outcome.priority.as_str(),
                    urgency = outcome.urgency,
                    "fallback decision"
                );
                Prediction {
                    priority: outcome.priority,
                    confidence: round1(outcome.confidence),
                    urgency_score: round1(outcome.urgency),
                    base_prediction: outcome.priority.as_str().to_string(),
                    base_confidence: round1(outcome.confidence),
                    fallback: true,
                }
            }
        };

        Ok(prediction)
    }
}

/// The fallback path scores keyword text alongside the task text.
fn fallback_text(task_text: &str, keywords: &str) -> String {
    if keywords.trim().is_empty() {
        task_text.to_string()
    } else {
        format!("{task_text} {keywords}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use triage_core::BaseDecision;
    use triage_ai::ClassifierError;

    struct FixedClassifier {
        label: &'static str,
        confidence: f64,
    }

    #[async_trait]
    impl Classifier for FixedClassifier {
        async fn classify(&self, _: &ClassifierInput) -> Result<BaseDecision, ClassifierError> {
            Ok(BaseDecision {
                label: self.label.to_string(),
                confidence: self.confidence,
            })
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl Classifier for FailingClassifier {
        async fn classify(&self, _: &ClassifierInput) -> Result<BaseDecision, ClassifierError> {
            Err(ClassifierError::Server {
                status: 503,
                body: "model not loaded".into(),
            })
        }
    }

    fn with_classifier(label: &'static str, confidence: f64) -> Orchestrator {
        Orchestrator::new(Arc::new(FixedClassifier { label, confidence }))
    }

    #[tokio::test]
    async fn rejects_empty_task_text() {
        let orch = Orchestrator::without_classifier();
        let result = orch.predict(&TaskRequest::new("   ")).await;
        assert!(matches!(result, Err(TriageError::EmptyTaskText)));
    }

    #[tokio::test]
    async fn fuses_classifier_output() {
        let orch = with_classifier("high", 80.0);
        let request =
            TaskRequest::new("URGENT: Production server is down, immediate action required");
        let p = orch.predict(&request).await.unwrap();

        assert_eq!(p.priority, Priority::Critical);
        assert_eq!(p.confidence, 95.0);
        assert_eq!(p.urgency_score, 5.0);
        assert_eq!(p.base_prediction, "high");
        assert_eq!(p.base_confidence, 80.0);
        assert!(!p.fallback);
    }

    #[tokio::test]
    async fn classifier_failure_degrades_to_fallback() {
        let orch = Orchestrator::new(Arc::new(FailingClassifier));
        let p = orch
            .predict(&TaskRequest::new("deadline is tomorrow"))
            .await
            .unwrap();

        assert!(p.fallback);
        assert_eq!(p.priority, Priority::High);
        assert_eq!(p.confidence, 70.0);
        assert_eq!(p.base_prediction, "high", "echoes the final priority");
    }

    #[tokio::test]
    async fn missing_classifier_takes_fallback_path() {
        let orch = Orchestrator::without_classifier();
        assert!(!orch.classifier_available());

        let p = orch
            .predict(&TaskRequest::new("water the office plants"))
            .await
            .unwrap();
        assert!(p.fallback);
        assert_eq!(p.priority, Priority::Medium);
        assert_eq!(p.confidence, 60.0);
        assert_eq!(p.urgency_score, 0.0);
    }

    #[tokio::test]
    async fn fallback_scores_keyword_text_too() {
        let orch = Orchestrator::without_classifier();
        let mut request = TaskRequest::new("investigate the login page");
        request.keywords = "bug,customer".into();

        let p = orch.predict(&request).await.unwrap();
        assert_eq!(p.priority, Priority::High, "keyword 'bug' drives the ladder");
        assert_eq!(p.confidence, 65.0);
    }

    #[tokio::test]
    async fn fusion_ignores_keyword_text() {
        let orch = with_classifier("medium", 70.0);
        let mut request = TaskRequest::new("tidy the supply cupboard");
        request.keywords = "emergency,asap".into();

        let p = orch.predict(&request).await.unwrap();
        assert_eq!(p.urgency_score, 0.0, "keywords never feed the fusion scorer");
        assert_eq!(p.priority, Priority::Medium);
    }

    #[tokio::test]
    async fn confidence_is_rounded_to_one_decimal() {
        // 0.843 normalises upstream; here the collaborator reports a
        // fractional percentage directly.
        let orch = with_classifier("medium", 72.34);
        let p = orch
            .predict(&TaskRequest::new("submission due next week"))
            .await
            .unwrap();

        // urgency 2.0 -> branch 3: 72.34 + 10 = 82.34 -> 82.3.
        assert_eq!(p.priority, Priority::High);
        assert_eq!(p.confidence, 82.3);
        assert_eq!(p.base_confidence, 72.3);
    }

    #[tokio::test]
    async fn negative_override_floors_at_60_end_to_end() {
        let orch = with_classifier("medium", 0.0);
        let p = orch
            .predict(&TaskRequest::new("Organize old files whenever convenient"))
            .await
            .unwrap();

        assert_eq!(p.priority, Priority::Low);
        assert_eq!(p.confidence, 60.0);
        assert!(p.urgency_score <= -2.0);
    }

    #[tokio::test]
    async fn prediction_serialises_with_flat_fields() {
        let orch = with_classifier("low", 55.0);
        let p = orch
            .predict(&TaskRequest::new("Review documentation when you have time"))
            .await
            .unwrap();

        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["priority"], "low");
        assert_eq!(json["base_prediction"], "low");
        assert_eq!(json["fallback"], false);
    }

    #[test]
    fn neutral_default_values() {
        let p = Prediction::neutral();
        assert_eq!(p.priority, Priority::Medium);
        assert_eq!(p.confidence, 60.0);
        assert_eq!(p.urgency_score, 0.0);
        assert_eq!(p.base_prediction, "medium");
        assert!(p.fallback);
    }

    #[test]
    fn round1_behaviour() {
        assert_eq!(round1(82.34), 82.3);
        assert_eq!(round1(82.36), 82.4);
        assert_eq!(round1(-1.25), -1.3);
        assert_eq!(round1(5.0), 5.0);
    }
}
