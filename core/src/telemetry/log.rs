use log::{info, warn};

/// Thin wrapper over the `log` facade for engine operations.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    /// Records a completed engine operation.
    pub fn record_op(&self, op: &str, detail: &str) {
        info!("{} {}", op, detail);
    }

    /// Records a rejected operation (unset slot, dimension mismatch).
    pub fn record_rejection(&self, op: &str, reason: &str) {
        warn!("{} rejected: {}", op, reason);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
