//! In-memory storage implementation.
//!
//! Used by tests and by deployments that run without a data directory.
//! Records live in a `BTreeMap` keyed by employee id, so iteration order
//! already matches the page order.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use staffdir_core::EmployeeId;

use crate::error::{Result, StoreError};
use crate::query::select_page;
use crate::types::{Employee, EmployeePage, SearchFilters};
use crate::EmployeeStore;

/// A process-local employee store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: RwLock<BTreeMap<EmployeeId, Employee>>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeStore for MemoryStore {
    fn put_employee(&self, employee: &Employee) -> Result<()> {
        let mut employees = self.employees.write();

        if let Some(existing) = employees.get(&employee.id) {
            if existing.org_id != employee.org_id {
                return Err(StoreError::OrgMismatch {
                    employee_id: employee.id.clone(),
                    existing: existing.org_id.clone(),
                    requested: employee.org_id.clone(),
                });
            }
        }

        employees.insert(employee.id.clone(), employee.clone());
        Ok(())
    }

    fn get_employee(&self, employee_id: &EmployeeId) -> Result<Option<Employee>> {
        Ok(self.employees.read().get(employee_id).cloned())
    }

    fn query(&self, filters: &SearchFilters) -> Result<EmployeePage> {
        let employees = self.employees.read();
        let rows = employees
            .values()
            .filter(|e| e.org_id == filters.org_id)
            .cloned()
            .map(Ok);
        select_page(rows, filters)
    }

    fn count_employees(&self) -> Result<u64> {
        Ok(self.employees.read().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use staffdir_core::OrgId;

    fn org(id: &str) -> OrgId {
        OrgId::new(id).unwrap()
    }

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        assert_eq!(seed::seed_if_empty(&store).unwrap(), 7);
        store
    }

    #[test]
    fn name_filter() {
        let store = seeded();
        let page = store
            .query(&SearchFilters::new(org("org_a")).with_name("john"))
            .unwrap();

        // "John Doe" and "Bob Johnson" both contain "john".
        let names: Vec<&str> = page.employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(page.total, 2);
        assert_eq!(names, vec!["John Doe", "Bob Johnson"]);
    }

    #[test]
    fn isolation_across_orgs() {
        let store = seeded();
        let page = store
            .query(&SearchFilters::new(org("org_b")).with_name("John"))
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.employees[0].name, "John Smith");
    }

    #[test]
    fn unknown_org_is_empty() {
        let store = seeded();
        let page = store
            .query(&SearchFilters::new(org("unknown_org")))
            .unwrap();
        assert_eq!(page, EmployeePage::default());
    }

    #[test]
    fn combined_exact_filters() {
        let store = seeded();
        let filters = SearchFilters::new(org("org_b"))
            .with_department("Engineering")
            .with_location("HN")
            .with_position("SE");
        let page = store.query(&filters).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.employees[0].id.as_str(), "e7");
    }

    #[test]
    fn org_is_immutable() {
        let store = seeded();
        let mut moved = store
            .get_employee(&EmployeeId::new("e1").unwrap())
            .unwrap()
            .unwrap();
        moved.org_id = org("org_b");
        assert!(matches!(
            store.put_employee(&moved),
            Err(StoreError::OrgMismatch { .. })
        ));
    }
}
