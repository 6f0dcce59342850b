//! 组织架构服务
//!
//! 在目录数据源之上编排层级引擎：
//! - 每次刷新整体重建快照并原子替换，不做增量修补
//! - 首次构建时以根节点初始化展开状态，之后的刷新保留展开状态
//! - 提供列表/树视图、统计和个人档案下钻

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::application::output::{visible_rows, TreeRow};
use crate::core::config::EngineConfig;
use crate::core::directory::DirectorySource;
use crate::core::hierarchy::{build_hierarchy_with, get_children, get_roots, reporting_chain};
use crate::core::integrity::{check_directory, IntegrityReport};
use crate::core::search::{visible_nodes, ViewMode};
use crate::core::stats::compute_stats;
use crate::core::view_state::{SharedViewState, ViewState};
use crate::domain::{EmployeeRecord, OrgNode, OrgStats};
use crate::errors::{OrgChartError, Result};
use crate::infrastructure::logger::Timer;

/// 某一目录快照的完整构建结果，构建后不再修改
#[derive(Debug, Clone, Serialize)]
pub struct HierarchySnapshot {
    pub nodes: Vec<OrgNode>,
    pub stats: OrgStats,
    pub report: IntegrityReport,
    /// 构建时间戳（秒）
    pub built_at: i64,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl HierarchySnapshot {
    /// 构建快照
    pub fn build(directory: &[EmployeeRecord], config: &EngineConfig) -> Self {
        Self::build_with_report(directory, config, check_directory(directory))
    }

    /// 使用已经算好的完整性报告构建快照
    pub fn build_with_report(
        directory: &[EmployeeRecord],
        config: &EngineConfig,
        report: IntegrityReport,
    ) -> Self {
        let nodes = build_hierarchy_with(directory, &config.defaults);
        let stats = compute_stats(&nodes);
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();

        Self {
            nodes,
            stats,
            report,
            built_at: chrono::Utc::now().timestamp(),
            index,
        }
    }

    /// 按 id 查找节点，重复 id 时后出现的节点生效
    pub fn get(&self, id: &str) -> Option<&OrgNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn roots(&self) -> Vec<&OrgNode> {
        get_roots(&self.nodes)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// 个人档案视图
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub employee: OrgNode,
    pub manager: Option<OrgNode>,
    /// 从直属上级到根
    pub reporting_chain: Vec<OrgNode>,
    pub direct_reports: Vec<OrgNode>,
}

/// 组织架构服务
pub struct OrgChartService {
    source: Arc<dyn DirectorySource>,
    config: EngineConfig,
    snapshot: RwLock<Option<Arc<HierarchySnapshot>>>,
    view_state: SharedViewState,
}

impl OrgChartService {
    /// 创建新的组织架构服务
    pub fn new(source: Arc<dyn DirectorySource>, config: EngineConfig) -> Self {
        Self {
            source,
            config,
            snapshot: RwLock::new(None),
            view_state: SharedViewState::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 重新加载目录并整体重建
    pub async fn refresh(&self) -> Result<Arc<HierarchySnapshot>> {
        let directory = self.source.load_directory().await?;
        let report = check_directory(&directory);
        Ok(self.install(&directory, report).await)
    }

    /// 严格刷新：目录未通过完整性检查时返回错误，保留旧快照
    pub async fn refresh_strict(&self) -> Result<Arc<HierarchySnapshot>> {
        let directory = self.source.load_directory().await?;
        let report = check_directory(&directory);
        if !report.is_clean() {
            report.log();
            return Err(OrgChartError::IntegrityError(report));
        }
        Ok(self.install(&directory, report).await)
    }

    async fn install(
        &self,
        directory: &[EmployeeRecord],
        report: IntegrityReport,
    ) -> Arc<HierarchySnapshot> {
        report.log();
        let snapshot = {
            let _timer = Timer::new("build_hierarchy").with_records(directory.len());
            Arc::new(HierarchySnapshot::build_with_report(
                directory,
                &self.config,
                report,
            ))
        };

        let mut current = self.snapshot.write().await;
        if current.is_none() {
            let mut state = ViewState::from_roots(snapshot.roots());
            if self.config.expand_all {
                state.expand_all(&snapshot.nodes);
            }
            self.view_state.update(|s| *s = state).await;
        }
        *current = Some(snapshot.clone());

        tracing::info!(
            employees = snapshot.stats.total_count,
            departments = snapshot.stats.department_count,
            depth = snapshot.stats.depth,
            "org chart refreshed"
        );
        snapshot
    }

    /// 当前快照，尚未构建时先刷新
    pub async fn snapshot(&self) -> Result<Arc<HierarchySnapshot>> {
        if let Some(snapshot) = self.snapshot.read().await.as_ref() {
            return Ok(snapshot.clone());
        }
        self.refresh().await
    }

    pub async fn stats(&self) -> Result<OrgStats> {
        Ok(self.snapshot().await?.stats)
    }

    /// 按渲染模式返回要显示的节点
    pub async fn visible(&self, mode: ViewMode, query: &str) -> Result<Vec<OrgNode>> {
        let snapshot = self.snapshot().await?;
        Ok(visible_nodes(&snapshot.nodes, mode, query)
            .into_iter()
            .cloned()
            .collect())
    }

    /// 当前展开状态下树视图的可见行
    pub async fn tree_rows(&self) -> Result<Vec<TreeRow>> {
        let snapshot = self.snapshot().await?;
        let state = self.view_state.snapshot().await;
        Ok(visible_rows(&snapshot.nodes, &state))
    }

    /// 切换节点展开状态，返回切换后的状态
    pub async fn toggle(&self, node_id: &str) -> Result<bool> {
        self.require(node_id).await?;
        Ok(self.view_state.toggle(node_id).await)
    }

    pub async fn is_expanded(&self, node_id: &str) -> bool {
        self.view_state.is_expanded(node_id).await
    }

    /// 展开节点的汇报链，使其在树中可见
    pub async fn reveal(&self, node_id: &str) -> Result<()> {
        let snapshot = self.require(node_id).await?;
        self.view_state
            .update(|state| state.expand_path_to(&snapshot.nodes, node_id))
            .await;
        Ok(())
    }

    /// 个人档案：本人、直属上级、汇报链和直属下级
    pub async fn profile(&self, node_id: &str) -> Result<ProfileView> {
        let snapshot = self.require(node_id).await?;
        let employee = snapshot
            .get(node_id)
            .cloned()
            .ok_or_else(|| OrgChartError::NodeNotFound(node_id.to_string()))?;

        let chain: Vec<OrgNode> = reporting_chain(&snapshot.nodes, node_id)
            .into_iter()
            .cloned()
            .collect();
        let direct_reports = get_children(&snapshot.nodes, node_id)
            .into_iter()
            .cloned()
            .collect();

        Ok(ProfileView {
            employee,
            manager: chain.first().cloned(),
            reporting_chain: chain,
            direct_reports,
        })
    }

    /// 共享的视图状态
    pub fn view_state(&self) -> SharedViewState {
        self.view_state.clone()
    }

    async fn require(&self, node_id: &str) -> Result<Arc<HierarchySnapshot>> {
        let snapshot = self.snapshot().await?;
        if snapshot.get(node_id).is_none() {
            return Err(OrgChartError::NodeNotFound(node_id.to_string()));
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::directory::MemoryDirectory;

    #[test]
    fn test_snapshot_index_last_write_wins() {
        let snapshot = HierarchySnapshot::build(
            &[
                EmployeeRecord::new("1", "First"),
                EmployeeRecord::new("1", "Second"),
            ],
            &EngineConfig::default(),
        );

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("1").map(|n| n.name.as_str()), Some("Second"));
        assert!(!snapshot.report.is_clean());
    }

    #[test]
    fn test_snapshot_keeps_supplied_report() {
        let directory = [
            EmployeeRecord::reporting_to("a", "Ann", "b"),
            EmployeeRecord::reporting_to("b", "Ben", "a"),
        ];
        let report = check_directory(&directory);
        let snapshot = HierarchySnapshot::build_with_report(
            &directory,
            &EngineConfig::default(),
            report.clone(),
        );

        assert_eq!(snapshot.report, report);
        assert_eq!(snapshot.report.cyclic_ids(), vec!["a", "b"]);
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn test_strict_refresh_installs_clean_report() {
        let source = Arc::new(MemoryDirectory::new(vec![
            EmployeeRecord::new("1", "Alice"),
            EmployeeRecord::reporting_to("2", "Bob", "1"),
        ]));
        let service = OrgChartService::new(source, EngineConfig::default());

        let snapshot = service.refresh_strict().await.unwrap();
        assert!(snapshot.report.is_clean());
        assert_eq!(snapshot.get("2").map(|n| n.level), Some(1));
    }

    #[tokio::test]
    async fn test_lazy_snapshot() {
        let source = Arc::new(MemoryDirectory::new(vec![EmployeeRecord::new("1", "Alice")]));
        let service = OrgChartService::new(source, EngineConfig::default());

        let snapshot = service.snapshot().await.unwrap();
        assert_eq!(snapshot.stats.total_count, 1);
        assert!(service.is_expanded("1").await);
    }
}
