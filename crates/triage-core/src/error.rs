use thiserror::Error;

/// Errors surfaced to callers of the engine.
///
/// Collaborator failures are not represented here: the orchestrator
/// recovers from them by switching to the fallback policy. Malformed
/// advisory metadata is coerced at the deserialisation boundary rather
/// than rejected.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Task text was empty or whitespace-only. Surfaced as a rejection,
    /// never silently defaulted.
    #[error("task text is empty")]
    EmptyTaskText,
}
