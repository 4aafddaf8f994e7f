//! `claimcheck <policy.json> <item...>`
//!
//! Prints the verdict for one item as JSON. `--config` (or `CLAIMCHECK_CONFIG`)
//! names a YAML runtime config that overrides thresholds and canonicalization.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use claimcheck::{matcher_from_config, ClaimcheckConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "claimcheck")]
#[command(about = "Check whether an item is claimable under a benefits policy")]
struct Cli {
    /// Policy document (JSON)
    policy: PathBuf,

    /// Item to check; multiple words are joined with spaces
    #[arg(required = true, trailing_var_arg = true)]
    item: Vec<String>,

    /// YAML runtime config
    #[arg(long, env = "CLAIMCHECK_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    fn query(&self) -> String {
        self.item.join(" ")
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = match &cli.config {
        Some(path) => ClaimcheckConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ClaimcheckConfig::default(),
    };

    let matcher = matcher_from_config(&config, Some(&cli.policy))
        .with_context(|| format!("loading policy {}", cli.policy.display()))?;
    let result = matcher.match_query(&cli.query())?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
