//! Core types and utilities for staffdir.
//!
//! This crate provides the foundational types used throughout the staffdir
//! employee directory:
//!
//! - **Identifiers**: Strongly-typed tenant and employee IDs
//! - **Columns**: The closed whitelist of projectable employee fields
//! - **Error types**: Common error definitions shared across crates
//!
//! # Example
//!
//! ```
//! use staffdir_core::{Column, EmployeeId, OrgId};
//!
//! let org_id = OrgId::new("org_a").unwrap();
//! let employee_id = EmployeeId::new("e1").unwrap();
//! let column: Column = "email".parse().unwrap();
//!
//! assert_eq!(org_id.as_str(), "org_a");
//! assert_eq!(employee_id.as_str(), "e1");
//! assert_eq!(column, Column::Email);
//! assert!("org_id".parse::<Column>().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod columns;
pub mod error;
pub mod ids;

pub use columns::{Column, UnknownColumn};
pub use error::{CoreError, Result};
pub use ids::{EmployeeId, IdError, OrgId};
