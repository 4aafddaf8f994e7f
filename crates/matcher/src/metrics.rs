// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then every `Matcher` reports the outcome, latency and suggestion count of each
// call to [`Matcher::match_query`](crate::Matcher::match_query). The engine stays
// free of any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::MatchOutcome;

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record one evaluated query.
    ///
    /// `outcome` is the decision step that produced the verdict, `latency` the
    /// wall-clock time spent in the matcher (canonicalization included), and
    /// `suggestion_count` the number of did-you-mean candidates returned.
    fn record_match(&self, outcome: &MatchOutcome, latency: Duration, suggestion_count: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// Usually called once during service startup so every `Matcher` shares the
/// same backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
