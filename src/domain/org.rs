//! Organizational Hierarchy Domain Entity
//!
//! Derived nodes and aggregate statistics produced by the hierarchy engine

use serde::{Deserialize, Serialize};

use crate::domain::employee::{non_blank, EmployeeId, EmployeeRecord};

/// Default title shown for records without one
pub const DEFAULT_TITLE: &str = "Team Member";

/// Default department shown for records without one
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Placeholders applied when a record omits optional display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDefaults {
    pub title: String,
    pub department: String,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
        }
    }
}

/// Org Node - one per employee record, immutable once a build completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgNode {
    pub id: EmployeeId,
    pub name: String,
    pub title: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_ref: Option<String>,
    /// Copy of the record's manager reference; may not resolve
    pub parent_id: Option<EmployeeId>,
    /// Direct reports in directory order
    pub child_ids: Vec<EmployeeId>,
    /// Hops from this node to its root
    pub level: usize,
}

impl OrgNode {
    /// Create node from a directory record
    ///
    /// `child_ids` starts empty and `level` at 0 until links and levels are resolved.
    pub fn from_record(record: &EmployeeRecord, defaults: &NodeDefaults) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            title: non_blank(record.title.as_deref())
                .unwrap_or(&defaults.title)
                .to_string(),
            department: non_blank(record.department.as_deref())
                .unwrap_or(&defaults.department)
                .to_string(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            avatar_ref: record.avatar_ref.clone(),
            parent_id: record.manager_ref().map(str::to_string),
            child_ids: Vec::new(),
            level: 0,
        }
    }

    /// Whether the node has any direct reports
    pub fn has_children(&self) -> bool {
        !self.child_ids.is_empty()
    }
}

/// Aggregate statistics over a node set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgStats {
    pub total_count: usize,
    pub department_count: usize,
    /// Max level plus one, or 0 for an empty node set
    pub depth: usize,
}
