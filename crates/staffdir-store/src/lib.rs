//! Storage layer for staffdir.
//!
//! This crate holds employee records and answers filtered, paginated queries
//! scoped to a single organization. Two backends implement the same
//! [`EmployeeStore`] trait:
//!
//! - [`RocksStore`]: persistent `RocksDB` storage
//! - [`MemoryStore`]: process-local storage for tests and ephemeral runs
//!
//! # Architecture
//!
//! `RocksStore` uses the following column families:
//!
//! - `employees`: Primary employee records, keyed by `employee_id`
//! - `employees_by_org`: Index for scanning one organization, keyed by
//!   `org_id || 0x00 || employee_id`
//!
//! Both backends hand their candidate rows, in ascending id order, to the
//! same selection routine, so filtering and pagination cannot drift apart.
//!
//! # Example
//!
//! ```no_run
//! use staffdir_store::{EmployeeStore, RocksStore, SearchFilters};
//! use staffdir_core::OrgId;
//!
//! let store = RocksStore::open("/tmp/staffdir-db").unwrap();
//!
//! let filters = SearchFilters::new(OrgId::new("org_a").unwrap())
//!     .with_department("Engineering")
//!     .with_page(10, 0);
//! let page = store.query(&filters).unwrap();
//! println!("{} matching employees", page.total);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod memory;
pub mod query;
pub mod rocks;
pub mod schema;
pub mod seed;
pub mod types;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use rocks::RocksStore;
pub use types::{Employee, EmployeePage, SearchFilters};

use staffdir_core::EmployeeId;

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer, allowing for different implementations
/// (e.g., `RocksDB`, in-memory for testing). Calls may block on I/O.
pub trait EmployeeStore: Send + Sync {
    /// Insert or update an employee record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OrgMismatch` if the id already belongs to a
    /// different organization, or an error if the database operation fails.
    fn put_employee(&self, employee: &Employee) -> Result<()>;

    /// Get an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_employee(&self, employee_id: &EmployeeId) -> Result<Option<Employee>>;

    /// Return one page of the employees of `filters.org_id` that satisfy
    /// the filters, ordered by id, along with the total match count.
    ///
    /// An offset past the last match yields an empty page, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn query(&self, filters: &SearchFilters) -> Result<EmployeePage>;

    /// Count all employee records across every organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn count_employees(&self) -> Result<u64>;
}
