//! Per-organization column configuration.
//!
//! Each organization sees an ordered subset of the [`Column`] whitelist.
//! The table is fixed when the registry is built and never changes
//! afterwards; organizations without an entry get the default set.

use std::collections::HashMap;

use staffdir_core::{Column, OrgId};

/// Table key of the default column set in the builtin configuration.
pub const DEFAULT_ORG_KEY: &str = "org_default";

const BUILTIN_TABLE: &[(&str, &[&str])] = &[
    ("org_a", &["name", "email", "department", "location"]),
    ("org_b", &["name", "department", "position"]),
    (
        DEFAULT_ORG_KEY,
        &["id", "name", "email", "department", "location", "position"],
    ),
];

/// Static mapping from organization to its ordered visible columns.
#[derive(Debug, Clone)]
pub struct ColumnConfigRegistry {
    by_org: HashMap<OrgId, Vec<Column>>,
    default: Vec<Column>,
}

impl ColumnConfigRegistry {
    /// The reference configuration shipped with the service.
    #[must_use]
    pub fn builtin() -> Self {
        let default = BUILTIN_TABLE
            .iter()
            .find(|(org, _)| *org == DEFAULT_ORG_KEY)
            .map_or(&[][..], |(_, names)| *names);
        Self::from_table(BUILTIN_TABLE, default)
    }

    /// Build a registry from raw column names.
    ///
    /// Names outside the whitelist (including `org_id`) and repeated names
    /// are dropped with a warning; the remaining names keep their relative
    /// order. Entries whose organization id is invalid are skipped.
    #[must_use]
    pub fn from_table(entries: &[(&str, &[&str])], default: &[&str]) -> Self {
        let mut by_org = HashMap::with_capacity(entries.len());
        for (org, names) in entries {
            match OrgId::new(*org) {
                Ok(org_id) => {
                    by_org.insert(org_id, sanitize(org, names));
                }
                Err(e) => tracing::warn!(org = %org, error = %e, "Skipping column config entry"),
            }
        }

        Self {
            by_org,
            default: sanitize(DEFAULT_ORG_KEY, default),
        }
    }

    /// Ordered visible columns for an organization.
    ///
    /// Never fails: unknown organizations receive the default set, which may
    /// be empty.
    #[must_use]
    pub fn columns_for(&self, org_id: &OrgId) -> &[Column] {
        self.by_org.get(org_id).unwrap_or(&self.default)
    }
}

impl Default for ColumnConfigRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn sanitize(org: &str, names: &[&str]) -> Vec<Column> {
    let mut columns = Vec::with_capacity(names.len());
    for name in names {
        match name.parse::<Column>() {
            Ok(column) if !columns.contains(&column) => columns.push(column),
            Ok(column) => {
                tracing::warn!(org = %org, column = %column, "Dropping duplicate column");
            }
            Err(e) => tracing::warn!(org = %org, error = %e, "Dropping non-whitelisted column"),
        }
    }
    columns
}
