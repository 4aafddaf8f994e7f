use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use claimcheck::{ClaimcheckConfig, MatchConfig, Matcher, PolicyDocument};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Matcher over the policy loaded at startup (shared across requests)
    pub matcher: Arc<Matcher>,

    /// Prometheus render handle, present once the recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Load the policy (and optional runtime config) named by `config` and
    /// build the shared matcher. Any failure here is fatal for startup.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let match_cfg = match &config.runtime_config {
            Some(path) => ClaimcheckConfig::from_file(path)
                .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?
                .match_config(),
            None => MatchConfig::default(),
        };

        let policy = PolicyDocument::from_path(&config.policy_path)?;
        let matcher = Matcher::new(policy, match_cfg)?;

        Ok(Self::with_matcher(config, matcher))
    }

    /// Build state around an already constructed matcher.
    pub fn with_matcher(config: ServerConfig, matcher: Matcher) -> Self {
        Self {
            config: Arc::new(config),
            matcher: Arc::new(matcher),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn policy(&self) -> &PolicyDocument {
        self.matcher.policy()
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub policy_version: Option<String>,
}
