//! Soft-diagnostic reporting.
//!
//! Normalization warnings are advisory: they go through a pluggable sink
//! and never alter control flow. Each
//! [`DistributionPair`](crate::DistributionPair) carries its own
//! configuration, so there is no process-wide mutable state to race on.

use std::fmt;
use std::sync::Arc;

/// Reporting sink invoked once per diagnostic message.
pub type ReportFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Per-pair diagnostic configuration.
#[derive(Clone)]
pub struct Diagnostics {
    enabled: bool,
    sink: ReportFn,
}

impl Diagnostics {
    /// Reporting disabled, no-op sink. The library-safe default.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            sink: Arc::new(|_| {}),
        }
    }

    /// Warnings printed to stderr.
    pub fn stderr() -> Self {
        Self {
            enabled: true,
            sink: Arc::new(|message| eprintln!("{message}")),
        }
    }

    /// Reporting enabled through a custom sink.
    pub fn with_sink(sink: ReportFn) -> Self {
        Self {
            enabled: true,
            sink,
        }
    }

    /// Whether messages reach the sink.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn report(&self, message: &str) {
        if self.enabled {
            (self.sink)(message);
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::disabled()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("enabled", &self.enabled)
            .finish()
    }
}
