//! Demo directory data.
//!
//! A fresh store is seeded with two small organizations so the service is
//! usable out of the box.

use staffdir_core::{EmployeeId, OrgId};

use crate::error::Result;
use crate::types::Employee;
use crate::EmployeeStore;

/// `(id, org_id, name, email, department, location, position)`
const DEMO_ROWS: [[&str; 7]; 7] = [
    ["e1", "org_a", "John Doe", "john@org-a.com", "Engineering", "HN", "SE"],
    ["e2", "org_a", "Jane Smith", "jane@org-a.com", "HR", "HCM", "Manager"],
    ["e3", "org_a", "Bob Johnson", "bob@org-a.com", "Engineering", "HN", "Lead"],
    ["e4", "org_a", "Alice Brown", "alice@org-a.com", "Finance", "DN", "Analyst"],
    ["e5", "org_b", "Charlie Wilson", "charlie@org-b.com", "Engineering", "HN", "Architect"],
    ["e6", "org_b", "Diana Prince", "diana@org-b.com", "Product", "HCM", "PM"],
    ["e7", "org_b", "John Smith", "john.s@org-b.com", "Engineering", "HN", "SE"],
];

/// Build the demo employee records.
///
/// # Errors
///
/// Returns an error if a demo row carries an invalid identifier.
pub fn demo_employees() -> staffdir_core::Result<Vec<Employee>> {
    DEMO_ROWS.iter().map(employee_from_row).collect()
}

fn employee_from_row(row: &[&str; 7]) -> staffdir_core::Result<Employee> {
    let [id, org_id, name, email, department, location, position] = *row;
    Ok(Employee {
        id: EmployeeId::new(id)?,
        org_id: OrgId::new(org_id)?,
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        position: position.to_string(),
    })
}

/// Insert the demo records if the store holds no employees.
///
/// Returns the number of records inserted (zero if the store was already
/// populated).
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn seed_if_empty<S: EmployeeStore + ?Sized>(store: &S) -> Result<usize> {
    if store.count_employees()? > 0 {
        tracing::debug!("Store already populated, skipping seed");
        return Ok(0);
    }

    let employees = demo_employees()?;
    for employee in &employees {
        store.put_employee(employee)?;
    }

    tracing::info!(count = employees.len(), "Seeded demo employees");
    Ok(employees.len())
}
