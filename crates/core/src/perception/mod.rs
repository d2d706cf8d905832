//! Perception — everything that reads the raw message text.
//!
//! Emotion detection (model or keyword rules), mood categorization and
//! intensity analysis. No reply or lead logic lives here.

pub mod category;
pub mod classifier;
pub mod detector;
pub mod display;
pub mod intensity;
pub mod rules;

pub use category::categorize;
pub use detector::MoodDetector;
pub use intensity::analyze_intensity;
