//! Prometheus-backed implementation of the matcher metrics hook.

use std::time::Duration;

use matcher::{MatchMetrics, MatchOutcome};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Forwards matcher observations to the `metrics` facade.
#[derive(Debug, Default)]
pub struct PrometheusMatchMetrics;

impl MatchMetrics for PrometheusMatchMetrics {
    fn record_match(&self, outcome: &MatchOutcome, latency: Duration, suggestion_count: usize) {
        metrics::counter!("claimcheck_queries_total", "outcome" => outcome.label()).increment(1);
        metrics::histogram!("claimcheck_match_latency_seconds").record(latency.as_secs_f64());
        if suggestion_count > 0 {
            metrics::counter!("claimcheck_suggestions_total").increment(suggestion_count as u64);
        }
    }
}

/// Install the process-wide Prometheus recorder.
///
/// Can only succeed once per process.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}
