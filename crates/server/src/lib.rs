//! claimcheck server: HTTP API for benefits policy claimability checks
//!
//! Loads one policy document at startup and answers "is this item claimable?"
//! over JSON. The policy is immutable for the life of the process; restart to
//! pick up a new one.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /api/v1/check` - `{ "query": "yoga mat" }` to
//!   `{ is_claimable, message, matched_category, suggestions, outcome }`
//! - `GET /api/v1/policy` - Loaded policy overview
//! - `GET /api/v1/metadata` - Server metadata
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//!
//! Errors use `{ "error": { "code", "message" } }`; a blank query is a
//! `400 BAD_REQUEST`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
