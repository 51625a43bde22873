//! HTTP gateway for the staffdir employee directory.
//!
//! This crate provides the public-facing search API. It handles:
//!
//! - Per-organization sliding-window rate limiting
//! - Query parameter validation
//! - Mapping search outcomes to HTTP responses
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Clients                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      staffdir-gateway                       │
//! │  ┌──────────────────────┐     ┌─────────────────────────┐   │
//! │  │ SlidingWindowLimiter │ ──▶ │   Router + Handlers     │   │
//! │  └──────────────────────┘     └─────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                     ┌──────────────────┐
//!                     │  SearchService   │
//!                     └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::net::SocketAddr;
//! use std::sync::Arc;
//! use staffdir_gateway::{create_router, GatewayConfig, GatewayState};
//! use staffdir_search::SearchService;
//! use staffdir_store::RocksStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(RocksStore::open("/tmp/staffdir")?);
//! let search = Arc::new(SearchService::with_builtin_columns(store));
//!
//! let state = GatewayState::new(search, GatewayConfig::default());
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(
//!     listener,
//!     app.into_make_service_with_connect_info::<SocketAddr>(),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use clock::{Clock, SystemClock};
pub use config::{GatewayConfig, RateLimitConfig};
pub use error::{ApiError, ErrorBody, ErrorResponse};
pub use rate_limit::{Admission, RateLimitKey, SlidingWindowLimiter};
pub use openapi::StaffdirApiDoc;
pub use routes::{create_router, SEARCH_PATH};
pub use state::GatewayState;

#[cfg(any(test, feature = "test-utils"))]
pub use clock::ManualClock;
