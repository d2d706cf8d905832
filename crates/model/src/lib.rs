//! Emotion-model capability: the trait the classifier core calls through,
//! loaders that pick a model at startup, and an HTTP inference client.

pub mod http;
pub mod provider;
