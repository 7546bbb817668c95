//! Diagnostic sink passed into the pipeline and archive walker.
//!
//! The binary uses [`LogReporter`], which forwards to the `log` facade. Tests
//! use [`MemoryReporter`] to see exactly which items were skipped and why.

use crate::error::ExtractError;

/// Receives progress and per-item failure events.
pub trait Reporter {
    fn info(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    /// An item failed and was left out of the output.
    fn skipped(&mut self, item: &str, error: &ExtractError);
}

/// Forwards events to the global logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&mut self, message: &str) {
        log::warn!("{message}");
    }

    fn skipped(&mut self, item: &str, error: &ExtractError) {
        log::error!("Error processing {item}: {error}");
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    pub infos: Vec<String>,
    pub warnings: Vec<String>,
    /// `(item, error message)` per skipped item, in order.
    pub skipped: Vec<(String, String)>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for MemoryReporter {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn skipped(&mut self, item: &str, error: &ExtractError) {
        self.skipped.push((item.to_string(), error.to_string()));
    }
}
