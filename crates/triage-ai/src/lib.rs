//! Classifier collaborator boundary.
//!
//! The engine treats the text classifier as a black box that, given task
//! text and metadata, returns a label string and a confidence. This crate
//! owns that boundary: the [`Classifier`] trait, the wire contract, and
//! (behind the `http` feature) a client for an external model server.

pub mod classifier;
pub use classifier::{Classifier, ClassifierError, ClassifierInput, normalize_confidence};

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::HttpClassifier;
