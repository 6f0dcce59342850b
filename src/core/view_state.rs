//! 视图状态管理
//!
//! 记录树渲染时哪些节点处于展开状态。状态以节点 id 为键，
//! 与 OrgNode 分离，重新过滤或刷新目录后只要 id 不变就能保留。

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::core::hierarchy::reporting_chain;
use crate::domain::OrgNode;

/// 展开集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    expanded: HashSet<String>,
}

impl ViewState {
    /// 创建空的视图状态（全部折叠）
    pub fn new() -> Self {
        Self::default()
    }

    /// 首次构建时的默认状态：所有根节点展开
    pub fn from_roots<'a>(roots: impl IntoIterator<Item = &'a OrgNode>) -> Self {
        Self {
            expanded: roots.into_iter().map(|node| node.id.clone()).collect(),
        }
    }

    /// 切换展开状态，返回切换后的状态
    pub fn toggle(&mut self, node_id: &str) -> bool {
        if self.expanded.remove(node_id) {
            false
        } else {
            self.expanded.insert(node_id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.expanded.contains(node_id)
    }

    pub fn expand(&mut self, node_id: impl Into<String>) {
        self.expanded.insert(node_id.into());
    }

    pub fn collapse(&mut self, node_id: &str) {
        self.expanded.remove(node_id);
    }

    /// 展开所有节点
    pub fn expand_all(&mut self, nodes: &[OrgNode]) {
        self.expanded
            .extend(nodes.iter().map(|node| node.id.clone()));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// 展开节点的整条汇报链，使其在树中可见
    pub fn expand_path_to(&mut self, nodes: &[OrgNode], node_id: &str) {
        for manager in reporting_chain(nodes, node_id) {
            self.expanded.insert(manager.id.clone());
        }
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

/// 多个 UI 更新并发共享的视图状态
///
/// 读写锁保证同一时刻只有一个写者。
#[derive(Debug, Clone, Default)]
pub struct SharedViewState {
    inner: Arc<RwLock<ViewState>>,
}

impl SharedViewState {
    pub fn new(state: ViewState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    pub async fn toggle(&self, node_id: &str) -> bool {
        self.inner.write().await.toggle(node_id)
    }

    pub async fn is_expanded(&self, node_id: &str) -> bool {
        self.inner.read().await.is_expanded(node_id)
    }

    /// 在写锁内修改状态
    pub async fn update<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut ViewState) -> T,
    {
        let mut state = self.inner.write().await;
        f(&mut state)
    }

    /// 当前状态的副本
    pub async fn snapshot(&self) -> ViewState {
        self.inner.read().await.clone()
    }
}

/// 根据根节点创建视图状态
pub fn create_view_state<'a>(roots: impl IntoIterator<Item = &'a OrgNode>) -> ViewState {
    ViewState::from_roots(roots)
}

pub fn toggle_expanded(state: &mut ViewState, node_id: &str) -> bool {
    state.toggle(node_id)
}

pub fn is_expanded(state: &ViewState, node_id: &str) -> bool {
    state.is_expanded(node_id)
}
