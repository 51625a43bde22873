//! Key encoding utilities for `RocksDB`.
//!
//! This module provides functions to encode and decode keys for the
//! organization index. Keys sort byte-wise, so a prefix scan over one
//! organization yields its employees in ascending id order.

use staffdir_core::ids::KEY_SEPARATOR;
use staffdir_core::{EmployeeId, OrgId};

use crate::error::{Result, StoreError};

/// Encode an employee key (just the employee ID bytes).
#[must_use]
pub fn employee_key(employee_id: &EmployeeId) -> Vec<u8> {
    employee_id.as_bytes().to_vec()
}

/// Encode an org-employee index key: `org_id || 0x00 || employee_id`.
///
/// Ids never contain the separator byte, so one organization's prefix can
/// never match another organization's keys.
#[must_use]
pub fn org_employee_key(org_id: &OrgId, employee_id: &EmployeeId) -> Vec<u8> {
    let mut key = org_prefix(org_id);
    key.extend_from_slice(employee_id.as_bytes());
    key
}

/// Encode an org prefix for scanning all employees in an organization.
#[must_use]
pub fn org_prefix(org_id: &OrgId) -> Vec<u8> {
    let mut key = Vec::with_capacity(org_id.as_bytes().len() + 1);
    key.extend_from_slice(org_id.as_bytes());
    key.push(KEY_SEPARATOR);
    key
}

/// Extract the employee ID from an org-employee key.
///
/// # Errors
///
/// Returns `StoreError::Database` if the key is shorter than the prefix or
/// the suffix is not a valid employee id.
pub fn extract_employee_id(key: &[u8], prefix_len: usize) -> Result<EmployeeId> {
    let suffix = key
        .get(prefix_len..)
        .ok_or_else(|| StoreError::Database("truncated org index key".to_string()))?;
    let raw = std::str::from_utf8(suffix)
        .map_err(|e| StoreError::Database(format!("non-utf8 employee id in index: {e}")))?;
    EmployeeId::new(raw).map_err(|e| StoreError::Database(format!("corrupt org index key: {e}")))
}
