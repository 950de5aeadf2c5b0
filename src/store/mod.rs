pub mod json;

use crate::core::Record;
use crate::error::Result;

pub use json::{JsonFileStore, DEFAULT_DB_FILE};

/// Trait for record sources (JSON file, in-memory, ...)
pub trait RecordSource: Send + Sync {
    /// Load the full collection, in stored order
    fn load(&self) -> Result<Vec<Record>>;

    /// Where the records come from (for logging)
    fn describe(&self) -> String;
}

/// In-memory record source
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for MemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}

/// Dataset written when no store file exists yet
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("engine/start", "Ignition sequence start")
            .with_id("t1")
            .with_tags(["engine", "start"]),
        Record::new("engine/stop", "Shutdown sequence")
            .with_id("t2")
            .with_tags(["engine", "stop"]),
        Record::new("torque/limit", "Torque limit handler")
            .with_id("trq/limit")
            .with_tags(["torque"]),
        Record::new("brake/check", "Brake pressure check")
            .with_id("brk/check")
            .with_tags(["brake"]),
        Record::new("transmission/fragment", "Transmission fragment example")
            .with_id("trx/frag")
            .with_tags(["transmission"]),
    ]
}
