//! 搜索过滤
//!
//! 列表模式下按姓名、职位或部门做不区分大小写的子串匹配；
//! 树模式下不做过滤，保持层级完整

use serde::{Deserialize, Serialize};

use crate::domain::OrgNode;

/// 渲染模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// 可展开/折叠的层级树
    #[default]
    Tree,
    /// 按搜索过滤的扁平列表
    List,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tree" => Ok(ViewMode::Tree),
            "list" => Ok(ViewMode::List),
            _ => Err(format!("Unknown view mode: {}", s)),
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Tree => write!(f, "tree"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

/// 返回姓名、职位或部门包含查询串的节点，保持原有顺序
///
/// 空白查询返回全部节点；其余查询按原样（含首尾空格）匹配。
pub fn filter_by_search<'a>(nodes: &'a [OrgNode], query: &str) -> Vec<&'a OrgNode> {
    if query.trim().is_empty() {
        return nodes.iter().collect();
    }
    let needle = query.to_lowercase();

    nodes
        .iter()
        .filter(|node| matches_query(node, &needle))
        .collect()
}

/// `needle` 需已转为小写
fn matches_query(node: &OrgNode, needle: &str) -> bool {
    [&node.name, &node.title, &node.department]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// 按渲染模式确定要显示的节点
///
/// 搜索与树导航互斥：树模式忽略查询串。
pub fn visible_nodes<'a>(nodes: &'a [OrgNode], mode: ViewMode, query: &str) -> Vec<&'a OrgNode> {
    match mode {
        ViewMode::List => filter_by_search(nodes, query),
        ViewMode::Tree => nodes.iter().collect(),
    }
}
