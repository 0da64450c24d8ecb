use std::sync::Mutex;

/// Counts engine operations and rejections across a session.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    fills: usize,
    transposes: usize,
    multiplies: usize,
    rejections: usize,
}

/// Point-in-time copy of the session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpSnapshot {
    pub fills: usize,
    pub transposes: usize,
    pub multiplies: usize,
    pub rejections: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                fills: 0,
                transposes: 0,
                multiplies: 0,
                rejections: 0,
            }),
        }
    }

    pub fn record_fill(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.fills += 1;
        }
    }

    pub fn record_transpose(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.transposes += 1;
        }
    }

    pub fn record_multiply(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.multiplies += 1;
        }
    }

    pub fn record_rejection(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejections += 1;
        }
    }

    pub fn snapshot(&self) -> OpSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            OpSnapshot {
                fills: metrics.fills,
                transposes: metrics.transposes,
                multiplies: metrics.multiplies,
                rejections: metrics.rejections,
            }
        } else {
            OpSnapshot {
                fills: 0,
                transposes: 0,
                multiplies: 0,
                rejections: 0,
            }
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
