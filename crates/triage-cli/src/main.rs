//! CLI entry point: one-shot triage predictions.

mod display;

use std::sync::Arc;

use clap::Parser;
use triage_ai::HttpClassifier;
use triage_core::TriageError;
use triage_host::{Orchestrator, TaskRequest};

#[derive(Parser)]
#[command(name = "triage", version, about = "Assign a priority to a task description")]
struct Cli {
    /// Task description to triage.
    text: String,

    /// Comma-separated keywords attached to the task.
    #[arg(long, default_value = "")]
    keywords: String,

    /// Estimated effort in hours.
    #[arg(long, default_value_t = 0.0)]
    effort_hours: f64,

    /// Mark the task as flagged urgent by the requester.
    #[arg(long)]
    urgent: bool,

    /// Base URL of the classifier service, e.g. http://localhost:5000.
    /// Without it, predictions use the fallback policy only.
    #[arg(long, env = "TRIAGE_CLASSIFIER_URL")]
    classifier_url: Option<String>,

    /// Emit the prediction as JSON instead of a card.
    #[arg(long)]
    json: bool,

    /// Show the matched urgency signals alongside the prediction.
    #[arg(long)]
    explain: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let orchestrator = match &cli.classifier_url {
        Some(url) => {
            tracing::info!(url = %url, "using classifier service");
            Orchestrator::new(Arc::new(HttpClassifier::new(url.clone())))
        }
        None => Orchestrator::without_classifier(),
    };

    let request = TaskRequest {
        task_text: cli.text.clone(),
        keywords: cli.keywords.clone(),
        effort_hours: cli.effort_hours,
        is_urgent: cli.urgent,
    };

    let prediction = match orchestrator.predict(&request).await {
        Ok(p) => p,
        Err(TriageError::EmptyTaskText) => {
            eprintln!("error: task text is empty");
            std::process::exit(2);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        display::print_prediction_card(&prediction);
    }

    if cli.explain {
        display::print_signals(&triage_core::score(&cli.text));
    }

    Ok(())
}
