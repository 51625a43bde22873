//! Domain types stored in the database.
//!
//! These types represent directory records and the query descriptor used to
//! read them back.

use serde::{Deserialize, Serialize};
use staffdir_core::{Column, EmployeeId, OrgId};

/// An employee record stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the record.
    pub id: EmployeeId,
    /// Owning organization. Fixed at creation.
    pub org_id: OrgId,
    /// Full name.
    pub name: String,
    /// Work email address.
    pub email: String,
    /// Department name.
    pub department: String,
    /// Office location.
    pub location: String,
    /// Job title.
    pub position: String,
}

impl Employee {
    /// Read the value of a projectable column.
    #[must_use]
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Id => self.id.as_str(),
            Column::Name => &self.name,
            Column::Email => &self.email,
            Column::Department => &self.department,
            Column::Location => &self.location,
            Column::Position => &self.position,
        }
    }
}

/// Search criteria applied at the storage layer.
///
/// `org_id` is mandatory and is the tenant isolation boundary. The optional
/// filters are either absent or non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    /// Organization to search within.
    pub org_id: OrgId,
    /// Case-insensitive substring match on name.
    pub name: Option<String>,
    /// Exact match on department.
    pub department: Option<String>,
    /// Exact match on location.
    pub location: Option<String>,
    /// Exact match on position.
    pub position: Option<String>,
    /// Page size.
    pub limit: u32,
    /// Number of matching records to skip.
    pub offset: u64,
}

impl SearchFilters {
    /// Page size used when the caller does not ask for one.
    pub const DEFAULT_LIMIT: u32 = 20;
    /// Largest page size a caller may ask for.
    pub const MAX_LIMIT: u32 = 100;

    /// Create filters for an organization with default pagination.
    #[must_use]
    pub fn new(org_id: OrgId) -> Self {
        Self {
            org_id,
            name: None,
            department: None,
            location: None,
            position: None,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }

    /// Restrict to names containing `name`, ignoring case.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict to an exact department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Restrict to an exact location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Restrict to an exact position.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Set the pagination window.
    #[must_use]
    pub fn with_page(mut self, limit: u32, offset: u64) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// Whether an employee satisfies every predicate, tenant included.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        if employee.org_id != self.org_id {
            return false;
        }
        if let Some(name) = &self.name {
            if !employee.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        let exact = [
            (&self.department, &employee.department),
            (&self.location, &employee.location),
            (&self.position, &employee.position),
        ];
        exact
            .into_iter()
            .all(|(wanted, actual)| wanted.as_ref().map_or(true, |w| w == actual))
    }
}

/// One page of query results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePage {
    /// Records in the requested window, ascending by id.
    pub employees: Vec<Employee>,
    /// Number of records matching the filters, ignoring pagination.
    pub total: u64,
}
