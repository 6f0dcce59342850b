//! 层级构建引擎
//!
//! 将扁平的员工目录转换为可浏览的汇报关系森林：
//! - `factory`: 每条记录生成一个节点
//! - `links`: 连接上下级关系，找出根节点
//! - `levels`: 防环的层级计算
//!
//! 引擎是纯函数：不修改输入，相同目录总是得到相同结果。
//! 目录变化时整体重建，不做增量修补。

pub mod factory;
pub mod levels;
pub mod links;

use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::{EmployeeRecord, NodeDefaults, OrgNode};

pub use factory::create_nodes;
pub use levels::{resolve_levels, LevelResolution};
pub use links::{link_nodes, LinkResolution};

/// 按 id 查找节点下标，重复 id 时后出现的节点生效
#[derive(Debug, Clone)]
pub struct NodeIndex<'a> {
    by_id: HashMap<&'a str, usize>,
}

impl<'a> NodeIndex<'a> {
    pub fn new(nodes: &'a [OrgNode]) -> Self {
        let by_id = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), i))
            .collect();
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// 可解析的上级下标
    pub fn parent_of(&self, node: &OrgNode) -> Option<usize> {
        node.parent_id.as_deref().and_then(|pid| self.get(pid))
    }
}

/// 使用默认占位值构建层级
pub fn build_hierarchy(directory: &[EmployeeRecord]) -> Vec<OrgNode> {
    build_hierarchy_with(directory, &NodeDefaults::default())
}

/// 构建层级：创建节点、连接上下级、计算层级
///
/// 返回全部节点（根与非根），每个节点带有解析后的 `child_ids` 与 `level`。
pub fn build_hierarchy_with(directory: &[EmployeeRecord], defaults: &NodeDefaults) -> Vec<OrgNode> {
    let mut nodes = create_nodes(directory, defaults);
    let links = link_nodes(&mut nodes);
    let resolution = resolve_levels(&links.parents);

    for (node, level) in nodes.iter_mut().zip(resolution.levels) {
        node.level = level;
    }

    // 告警由完整性报告负责，这里只留调试信息
    for &member in &resolution.cyclic {
        tracing::debug!(
            node_id = %nodes[member].id,
            level = nodes[member].level,
            "cyclic reporting chain, level is approximate"
        );
    }

    tracing::debug!(
        records = directory.len(),
        roots = links.roots.len(),
        cyclic = resolution.cyclic.len(),
        "hierarchy built"
    );

    nodes
}

/// 没有可解析上级的节点，按目录顺序
pub fn get_roots(nodes: &[OrgNode]) -> Vec<&OrgNode> {
    let index = NodeIndex::new(nodes);
    nodes
        .iter()
        .filter(|node| index.parent_of(node).is_none())
        .collect()
}

/// `parent_id` 等于 `node_id` 的节点，按目录顺序
pub fn get_children<'a>(nodes: &'a [OrgNode], node_id: &str) -> Vec<&'a OrgNode> {
    nodes
        .iter()
        .filter(|node| node.parent_id.as_deref() == Some(node_id))
        .collect()
}

/// 按 id 查找节点
pub fn find_node<'a>(nodes: &'a [OrgNode], node_id: &str) -> Option<&'a OrgNode> {
    nodes.iter().rev().find(|node| node.id == node_id)
}

/// 从直属上级一直到根的汇报链
///
/// 遇到已访问过的节点即停止，环上的节点不会无限循环。
pub fn reporting_chain<'a>(nodes: &'a [OrgNode], node_id: &str) -> Vec<&'a OrgNode> {
    let index = NodeIndex::new(nodes);
    let Some(start) = index.get(node_id) else {
        return Vec::new();
    };

    let mut chain = Vec::new();
    let mut visited = HashSet::from([start]);
    let mut current = start;
    while let Some(parent) = index.parent_of(&nodes[current]) {
        if !visited.insert(parent) {
            break;
        }
        chain.push(&nodes[parent]);
        current = parent;
    }
    chain
}

/// 节点下方的所有成员，广度优先
pub fn descendants<'a>(nodes: &'a [OrgNode], node_id: &str) -> Vec<&'a OrgNode> {
    let index = NodeIndex::new(nodes);
    let Some(start) = index.get(node_id) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut visited = HashSet::from([start]);
    let mut queue: VecDeque<usize> = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for child_id in &nodes[current].child_ids {
            let Some(child) = index.get(child_id) else {
                continue;
            };
            if visited.insert(child) {
                result.push(&nodes[child]);
                queue.push_back(child);
            }
        }
    }
    result
}

/// 从任何根节点都无法到达的节点，即汇报环及挂在环下的成员
pub fn detached_nodes(nodes: &[OrgNode]) -> Vec<&OrgNode> {
    let index = NodeIndex::new(nodes);
    let mut reachable = vec![false; nodes.len()];
    let mut queue: VecDeque<usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| index.parent_of(node).is_none())
        .map(|(i, _)| i)
        .collect();

    while let Some(current) = queue.pop_front() {
        if reachable[current] {
            continue;
        }
        reachable[current] = true;
        queue.extend(nodes[current].child_ids.iter().filter_map(|id| index.get(id)));
    }

    nodes
        .iter()
        .zip(reachable)
        .filter(|(_, reached)| !reached)
        .map(|(node, _)| node)
        .collect()
}
