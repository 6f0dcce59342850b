//! 节点工厂
//!
//! 将目录中的每条员工记录映射为一个 OrgNode

use crate::domain::{EmployeeRecord, NodeDefaults, OrgNode};

/// 为每条记录创建一个节点，保持目录顺序
///
/// 重复的 id 不会被合并：每条记录都会得到自己的节点，按 id 查找时后出现的记录生效。
pub fn create_nodes(directory: &[EmployeeRecord], defaults: &NodeDefaults) -> Vec<OrgNode> {
    directory
        .iter()
        .map(|record| OrgNode::from_record(record, defaults))
        .collect()
}
