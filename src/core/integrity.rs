//! 目录完整性检查
//!
//! 引擎对异常数据一律降级处理而不报错。需要严格校验的调用方在构建前
//! 运行本检查，得到数据质量问题清单。检查本身不修改输入，也不会失败。

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::core::hierarchy::{create_nodes, link_nodes};
use crate::domain::{EmployeeRecord, NodeDefaults};

/// 数据质量问题
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataQualityIssue {
    /// 记录没有 id
    #[error("record at position {position} has no id")]
    MissingIdentifier { position: usize },

    /// 多条记录共用同一 id，按 id 查找时后出现的记录生效
    #[error("id '{id}' is shared by records at positions {positions:?}")]
    DuplicateIdentifier { id: String, positions: Vec<usize> },

    /// 上级 id 不存在，节点被提升为根
    #[error("'{id}' reports to unknown manager '{manager_id}'")]
    DanglingManagerReference { id: String, manager_id: String },

    /// 汇报链成环，环上节点的层级是近似值
    #[error("cyclic reporting chain: {}", ids.join(" -> "))]
    CyclicReportingChain { ids: Vec<String> },
}

/// 完整性检查报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub issues: Vec<DataQualityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// 环上的全部 id
    pub fn cyclic_ids(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter_map(|issue| match issue {
                DataQualityIssue::CyclicReportingChain { ids } => Some(ids),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// 以 warn 级别记录每个问题
    pub fn log(&self) {
        for issue in &self.issues {
            tracing::warn!(issue = %issue, "directory data quality issue");
        }
    }
}

/// 检查目录中的缺失 id、重复 id、悬空上级引用与汇报环
pub fn check_directory(directory: &[EmployeeRecord]) -> IntegrityReport {
    let mut issues = Vec::new();

    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    for (position, record) in directory.iter().enumerate() {
        if record.id.trim().is_empty() {
            issues.push(DataQualityIssue::MissingIdentifier { position });
        }
        positions.entry(record.id.as_str()).or_default().push(position);
    }

    let mut duplicates: Vec<(&str, Vec<usize>)> = positions
        .into_iter()
        .filter(|(_, at)| at.len() > 1)
        .collect();
    duplicates.sort_by_key(|(_, at)| at[0]);
    issues.extend(
        duplicates
            .into_iter()
            .map(|(id, positions)| DataQualityIssue::DuplicateIdentifier {
                id: id.to_string(),
                positions,
            }),
    );

    let mut nodes = create_nodes(directory, &NodeDefaults::default());
    let links = link_nodes(&mut nodes);

    for (node, parent) in nodes.iter().zip(&links.parents) {
        if let (None, Some(manager_id)) = (parent, &node.parent_id) {
            issues.push(DataQualityIssue::DanglingManagerReference {
                id: node.id.clone(),
                manager_id: manager_id.clone(),
            });
        }
    }

    for cycle in find_cycles(&links.parents) {
        issues.push(DataQualityIssue::CyclicReportingChain {
            ids: cycle.into_iter().map(|i| nodes[i].id.clone()).collect(),
        });
    }

    IntegrityReport { issues }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// 找出所有汇报环，每个环按遍历顺序列出成员下标
fn find_cycles(parents: &[Option<usize>]) -> Vec<Vec<usize>> {
    let mut marks = vec![Mark::Unvisited; parents.len()];
    let mut cycles = Vec::new();

    for start in 0..parents.len() {
        let mut path = Vec::new();
        let mut current = Some(start);

        while let Some(node) = current {
            match marks[node] {
                Mark::Done => break,
                Mark::OnPath => {
                    if let Some(pos) = path.iter().position(|&p| p == node) {
                        cycles.push(path[pos..].to_vec());
                    }
                    break;
                }
                Mark::Unvisited => {
                    marks[node] = Mark::OnPath;
                    path.push(node);
                    current = parents[node];
                }
            }
        }

        for node in path {
            marks[node] = Mark::Done;
        }
    }

    cycles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_directory() {
        let report = check_directory(&[
            EmployeeRecord::new("1", "Alice"),
            EmployeeRecord::reporting_to("2", "Bob", "1"),
        ]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_empty_directory_is_clean() {
        assert!(check_directory(&[]).is_clean());
    }

    #[test]
    fn test_reports_every_condition() {
        let report = check_directory(&[
            EmployeeRecord::new("1", "Alice"),
            EmployeeRecord::new("1", "Alice Again"),
            EmployeeRecord::new("", "Nobody"),
            EmployeeRecord::reporting_to("4", "Dan", "missing-id"),
            EmployeeRecord::reporting_to("a", "A", "b"),
            EmployeeRecord::reporting_to("b", "B", "a"),
        ]);

        assert_eq!(
            report.issues,
            vec![
                DataQualityIssue::MissingIdentifier { position: 2 },
                DataQualityIssue::DuplicateIdentifier {
                    id: "1".to_string(),
                    positions: vec![0, 1],
                },
                DataQualityIssue::DanglingManagerReference {
                    id: "4".to_string(),
                    manager_id: "missing-id".to_string(),
                },
                DataQualityIssue::CyclicReportingChain {
                    ids: vec!["a".to_string(), "b".to_string()],
                },
            ]
        );
        assert_eq!(report.cyclic_ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_cycle_reported_once_with_tail() {
        let report = check_directory(&[
            EmployeeRecord::reporting_to("tail", "Tail", "a"),
            EmployeeRecord::reporting_to("a", "A", "b"),
            EmployeeRecord::reporting_to("b", "B", "c"),
            EmployeeRecord::reporting_to("c", "C", "a"),
        ]);

        assert_eq!(report.len(), 1);
        assert_eq!(report.cyclic_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_issue_display() {
        let issue = DataQualityIssue::CyclicReportingChain {
            ids: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(issue.to_string(), "cyclic reporting chain: a -> b");
    }
}
