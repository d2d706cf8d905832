use std::sync::Mutex;

use crate::types::{LeadRecord, LeadWarmth};

/// Error reported by a record sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("sink unavailable: {0}")]
    Unavailable(String),
    #[error("write failed: {0}")]
    Write(String),
}

/// Outward port for whoever persists composed lead records
/// (CSV writer, database, report job...).
pub trait LeadSink: Send + Sync {
    fn record(&self, record: &LeadRecord) -> Result<(), SinkError>;
}

/// In-process sink that keeps every record it is handed. Unbounded: it
/// grows for as long as the owner keeps it, so it suits a single session.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LeadRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored records, oldest first.
    pub fn records(&self) -> Vec<LeadRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn warmths(&self) -> Vec<LeadWarmth> {
        self.records
            .lock()
            .map(|r| r.iter().map(|rec| rec.warmth).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LeadSink for MemorySink {
    fn record(&self, record: &LeadRecord) -> Result<(), SinkError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| SinkError::Unavailable("memory sink poisoned".into()))?;
        records.push(record.clone());
        Ok(())
    }
}
