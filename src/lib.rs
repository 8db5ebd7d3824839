// Mindhaven - local-first mental wellness companion
// Library exports

pub mod chatbot;
pub mod classifier;
pub mod cli;
pub mod community;
pub mod config;
pub mod content;
pub mod crisis;
pub mod errors;
pub mod journal;
pub mod mood;
pub mod store;

pub use classifier::{classify, ClassificationResult, Classifier};
pub use crisis::resolve_crisis_contacts;
