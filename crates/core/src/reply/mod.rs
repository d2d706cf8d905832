//! Templated replies: context detection, the mood × intensity response
//! matrix and context follow-ups.

pub mod context;
pub mod generator;
pub mod templates;

pub use context::detect_context;
pub use generator::{generate_reply, generate_reply_raw, EMPTY_INPUT_REPLY};
