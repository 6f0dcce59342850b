//! 统计汇总

use std::collections::HashSet;

use crate::domain::{OrgNode, OrgStats};

/// 计算节点总数、不同部门数与深度
///
/// 深度为最大层级加 1，空集合为 0。每次调用都重新计算。
pub fn compute_stats(nodes: &[OrgNode]) -> OrgStats {
    let departments: HashSet<&str> = nodes
        .iter()
        .map(|node| node.department.as_str())
        .filter(|dept| !dept.trim().is_empty())
        .collect();

    OrgStats {
        total_count: nodes.len(),
        department_count: departments.len(),
        depth: nodes.iter().map(|node| node.level + 1).max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hierarchy::{build_hierarchy, build_hierarchy_with};
    use crate::domain::{EmployeeRecord, NodeDefaults};

    #[test]
    fn test_empty() {
        assert_eq!(
            compute_stats(&[]),
            OrgStats {
                total_count: 0,
                department_count: 0,
                depth: 0
            }
        );
    }

    #[test]
    fn test_counts() {
        let nodes = build_hierarchy(&[
            EmployeeRecord::new("1", "Alice").with_department("Executive"),
            EmployeeRecord::reporting_to("2", "Bob", "1").with_department("Engineering"),
            EmployeeRecord::reporting_to("3", "Carol", "2").with_department("Engineering"),
        ]);

        let stats = compute_stats(&nodes);
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.department_count, 2);
        assert_eq!(stats.depth, 3);
    }

    #[test]
    fn test_blank_placeholder_not_counted() {
        let defaults = NodeDefaults {
            department: String::new(),
            ..NodeDefaults::default()
        };
        let nodes = build_hierarchy_with(
            &[
                EmployeeRecord::new("1", "Alice"),
                EmployeeRecord::new("2", "Bob").with_department("Sales"),
            ],
            &defaults,
        );

        assert_eq!(compute_stats(&nodes).department_count, 1);
    }
}
