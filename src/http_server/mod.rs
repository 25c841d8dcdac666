//! # HTTP Server Module
//!
//! JSON API over the contest services.
//!
//! # Endpoints
//!
//! - `/health` - Liveness check
//! - `/api/register`, `/api/login` - Accounts and tokens
//! - `/api/semi-finals/:semi`, `/api/grand-final` - Artist listings
//! - `/api/vote`, `/api/grand-vote` - Vote submission
//! - `/api/results`, `/api/results-final` - Aggregated results
//! - `/api/admin/final/*` - Grand-final curation

pub mod admin_routes;
pub mod auth_routes;
pub mod config;
pub mod contest_routes;
pub mod error;
pub mod observability_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use error::{ApiError, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
