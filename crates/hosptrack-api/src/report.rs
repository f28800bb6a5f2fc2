// Diagnostic reporting
//
// Every failure path in the client writes exactly one human-readable line
// before returning its sentinel. The sink is injected so callers choose
// where those lines go (console, log, test buffer).

use tracing::{info, warn};

/// Receives progress and diagnostic lines from the client and tracker.
pub trait Reporter: Send + Sync {
    /// A progress or result line.
    fn progress(&self, line: &str);

    /// A diagnostic line describing which operation failed and why.
    fn failure(&self, line: &str);
}

/// Forwards lines to `tracing` (`info` for progress, `warn` for failures).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn progress(&self, line: &str) {
        info!("{line}");
    }

    fn failure(&self, line: &str) {
        warn!("{line}");
    }
}
