//! claimcheck server binary
//!
//! Configure with `server.{toml,yaml,json}` or `CLAIMCHECK_SERVER__*`
//! environment variables, e.g. `CLAIMCHECK_SERVER__POLICY_PATH`.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    server::start_server(config).await?;
    Ok(())
}
