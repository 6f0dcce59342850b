//! 汇报关系连接
//!
//! 将 `parent_id` 引用连接为双向的父子边，并找出根节点

use crate::domain::OrgNode;

use super::NodeIndex;

/// 连接结果，以节点在数组中的下标表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResolution {
    /// 每个节点可解析的上级下标；悬空或缺失的引用为 `None`
    pub parents: Vec<Option<usize>>,
    /// 根节点下标，按目录顺序
    pub roots: Vec<usize>,
}

/// 填充每个节点的 `child_ids` 并返回根节点
///
/// 下属按目录顺序追加。上级引用无法解析的节点被提升为根节点，
/// 因此每个节点要么是根，要么恰好出现在一个上级的 `child_ids` 中。
pub fn link_nodes(nodes: &mut [OrgNode]) -> LinkResolution {
    let parents: Vec<Option<usize>> = {
        let index = NodeIndex::new(nodes);
        nodes
            .iter()
            .map(|node| node.parent_id.as_deref().and_then(|pid| index.get(pid)))
            .collect()
    };

    let mut roots = Vec::new();
    for (child, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) => {
                let child_id = nodes[child].id.clone();
                nodes[*parent].child_ids.push(child_id);
            }
            None => {
                if let Some(pid) = &nodes[child].parent_id {
                    tracing::debug!(
                        node_id = %nodes[child].id,
                        manager_id = %pid,
                        "dangling manager reference, promoting to root"
                    );
                }
                roots.push(child);
            }
        }
    }

    LinkResolution { parents, roots }
}
