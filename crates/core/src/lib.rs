//! Mood classification and reply templating core.
//!
//! `text → emotion → mood category → intensity → reply`, plus the lead
//! scoring heuristics that consume those outputs. Every public operation is
//! infallible: model problems degrade to keyword rules, unknown labels to
//! documented defaults.

pub mod config;
pub mod leads;
pub mod perception;
pub mod pipeline;
pub mod reply;
pub mod types;
