//! Tenant-scoped employee directory search.
//!
//! This crate turns a raw search request into validated filters, runs them
//! against an [`EmployeeStore`](staffdir_store::EmployeeStore), and projects
//! each matching record onto the columns its organization is allowed to see.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Gateway (HTTP)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  SearchRequest::into_filters
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SearchService                         │
//! │  ┌──────────────────────┐     ┌─────────────────────────┐   │
//! │  │ ColumnConfigRegistry │     │   ProjectedEmployee     │   │
//! │  └──────────────────────┘     └─────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       ┌──────────────┐
//!                       │    Store     │
//!                       │  (RocksDB)   │
//!                       └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use staffdir_search::{DirectorySearch, SearchRequest, SearchService};
//! use staffdir_store::RocksStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(RocksStore::open("/tmp/staffdir")?);
//! let search = SearchService::with_builtin_columns(store);
//!
//! let mut request = SearchRequest::for_org("org_a");
//! request.name = Some("john".to_string());
//!
//! let result = search.search(request.into_filters()?).await?;
//! println!("{} of {} employees", result.items.len(), result.total);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod columns;
pub mod error;
pub mod projection;
pub mod service;
pub mod types;

pub use columns::{ColumnConfigRegistry, DEFAULT_ORG_KEY};
pub use error::{Result, SearchError};
pub use projection::ProjectedEmployee;
pub use service::{DirectorySearch, SearchService};
pub use types::{SearchRequest, SearchResult};

// Re-export commonly used types from dependencies for convenience
pub use staffdir_core::{Column, EmployeeId, OrgId};
pub use staffdir_store::{Employee, SearchFilters};
