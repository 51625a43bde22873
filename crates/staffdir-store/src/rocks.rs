//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `EmployeeStore` trait.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options, WriteBatch,
};
use staffdir_core::EmployeeId;

use crate::error::{Result, StoreError};
use crate::keys;
use crate::query::select_page;
use crate::schema::{all_column_families, cf};
use crate::types::{Employee, EmployeePage, SearchFilters};
use crate::EmployeeStore;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl EmployeeStore for RocksStore {
    fn put_employee(&self, employee: &Employee) -> Result<()> {
        let cf_employees = self.cf(cf::EMPLOYEES)?;
        let cf_by_org = self.cf(cf::EMPLOYEES_BY_ORG)?;

        if let Some(existing) = self.get_employee(&employee.id)? {
            if existing.org_id != employee.org_id {
                return Err(StoreError::OrgMismatch {
                    employee_id: employee.id.clone(),
                    existing: existing.org_id,
                    requested: employee.org_id.clone(),
                });
            }
        }

        let employee_key = keys::employee_key(&employee.id);
        let org_employee_key = keys::org_employee_key(&employee.org_id, &employee.id);
        let value = Self::serialize(employee)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_employees, &employee_key, &value);
        // Index entry is idempotent; the org never changes.
        batch.put_cf(&cf_by_org, &org_employee_key, b"");

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn get_employee(&self, employee_id: &EmployeeId) -> Result<Option<Employee>> {
        let cf = self.cf(cf::EMPLOYEES)?;
        let key = keys::employee_key(employee_id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn query(&self, filters: &SearchFilters) -> Result<EmployeePage> {
        let cf_by_org = self.cf(cf::EMPLOYEES_BY_ORG)?;
        let prefix = keys::org_prefix(&filters.org_id);

        let iter = self.db.iterator_cf(
            &cf_by_org,
            IteratorMode::From(&prefix, rocksdb::Direction::Forward),
        );

        // Stop once we're past the prefix; index keys sort by employee id.
        let rows = iter
            .map(|item| item.map_err(|e| StoreError::Database(e.to_string())))
            .take_while(|item| {
                item.as_ref()
                    .map_or(true, |(key, _)| key.starts_with(&prefix))
            })
            .filter_map(|item| {
                let lookup = item
                    .and_then(|(key, _)| keys::extract_employee_id(&key, prefix.len()))
                    .and_then(|employee_id| self.get_employee(&employee_id));
                lookup.transpose()
            });

        let page = select_page(rows, filters)?;

        tracing::debug!(
            org_id = %filters.org_id,
            total = page.total,
            returned = page.employees.len(),
            "Queried employees"
        );

        Ok(page)
    }

    fn count_employees(&self) -> Result<u64> {
        let cf = self.cf(cf::EMPLOYEES)?;

        let mut count = 0u64;
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            item.map_err(|e| StoreError::Database(e.to_string()))?;
            count += 1;
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use staffdir_core::OrgId;
    use tempfile::TempDir;

    fn create_test_store() -> (RocksStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = RocksStore::open(dir.path()).unwrap();
        (store, dir)
    }

    fn create_test_employee(id: &str, org: &str, name: &str) -> Employee {
        Employee {
            id: EmployeeId::new(id).unwrap(),
            org_id: OrgId::new(org).unwrap(),
            name: name.to_string(),
            email: format!("{id}@{org}.example"),
            department: "Engineering".to_string(),
            location: "HN".to_string(),
            position: "SE".to_string(),
        }
    }

    fn org(id: &str) -> OrgId {
        OrgId::new(id).unwrap()
    }

    #[test]
    fn employee_crud() {
        let (store, _dir) = create_test_store();
        let mut employee = create_test_employee("e1", "org_a", "John Doe");

        // Create
        store.put_employee(&employee).unwrap();

        // Read
        let retrieved = store.get_employee(&employee.id).unwrap().unwrap();
        assert_eq!(retrieved, employee);

        // Update within the same org
        employee.position = "Lead".to_string();
        store.put_employee(&employee).unwrap();
        let updated = store.get_employee(&employee.id).unwrap().unwrap();
        assert_eq!(updated.position, "Lead");
        assert_eq!(store.count_employees().unwrap(), 1);

        // Missing
        let other = EmployeeId::new("e404").unwrap();
        assert!(store.get_employee(&other).unwrap().is_none());
    }

    #[test]
    fn org_is_immutable() {
        let (store, _dir) = create_test_store();
        store
            .put_employee(&create_test_employee("e1", "org_a", "John Doe"))
            .unwrap();

        let moved = create_test_employee("e1", "org_b", "John Doe");
        let result = store.put_employee(&moved);
        assert!(matches!(result, Err(StoreError::OrgMismatch { .. })));

        // The org_b scan must not pick up the rejected write.
        let page = store.query(&SearchFilters::new(org("org_b"))).unwrap();
        assert_eq!(page.total, 0);
    }

    #[test]
    fn query_is_scoped_to_org() {
        let (store, _dir) = create_test_store();
        seed::seed_if_empty(&store).unwrap();

        let page_a = store.query(&SearchFilters::new(org("org_a"))).unwrap();
        assert_eq!(page_a.total, 4);
        assert!(page_a.employees.iter().all(|e| e.org_id == org("org_a")));

        let page_b = store.query(&SearchFilters::new(org("org_b"))).unwrap();
        assert_eq!(page_b.total, 3);
        assert!(page_b.employees.iter().all(|e| e.org_id == org("org_b")));
    }

    #[test]
    fn query_prefix_does_not_bleed_into_similar_org() {
        let (store, _dir) = create_test_store();
        store
            .put_employee(&create_test_employee("e1", "org_a", "John Doe"))
            .unwrap();
        store
            .put_employee(&create_test_employee("e2", "org_a_2", "Jane Doe"))
            .unwrap();

        let page = store.query(&SearchFilters::new(org("org_a"))).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.employees[0].name, "John Doe");
    }

    #[test]
    fn query_orders_by_id() {
        let (store, _dir) = create_test_store();
        for id in ["e3", "e1", "e2"] {
            store
                .put_employee(&create_test_employee(id, "org_a", id))
                .unwrap();
        }

        let page = store.query(&SearchFilters::new(org("org_a"))).unwrap();
        let ids: Vec<&str> = page.employees.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn query_filters_and_paginates() {
        let (store, _dir) = create_test_store();
        seed::seed_if_empty(&store).unwrap();

        let filters = SearchFilters::new(org("org_a"))
            .with_department("Engineering")
            .with_page(1, 1);
        let page = store.query(&filters).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.employees.len(), 1);
        assert_eq!(page.employees[0].name, "Bob Johnson");

        let beyond = store.query(&filters.with_page(5, 10)).unwrap();
        assert_eq!(beyond.total, 2);
        assert!(beyond.employees.is_empty());
    }

    #[test]
    fn reopen_keeps_records() {
        let dir = TempDir::new().unwrap();
        {
            let store = RocksStore::open(dir.path()).unwrap();
            seed::seed_if_empty(&store).unwrap();
        }
        let store = RocksStore::open(dir.path()).unwrap();
        assert_eq!(store.count_employees().unwrap(), 7);
        assert_eq!(seed::seed_if_empty(&store).unwrap(), 0);
    }
}
