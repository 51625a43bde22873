//! Database schema definitions and column families.
//!
//! This module defines the column families used in `RocksDB` storage.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Primary employee records, keyed by `employee_id`.
    pub const EMPLOYEES: &str = "employees";

    /// Index: employees by organization, keyed by `org_id || 0x00 || employee_id`.
    pub const EMPLOYEES_BY_ORG: &str = "employees_by_org";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::EMPLOYEES, cf::EMPLOYEES_BY_ORG]
}
