//! 组织架构层级引擎
//!
//! 将扁平的员工目录（每条记录可选地指向其上级）转换为可浏览的树/森林：
//! - 层级构建（节点创建、上下级连接、防环层级计算）
//! - 搜索过滤（列表模式）
//! - 展开/折叠状态（树模式）
//! - 统计汇总与完整性检查
//!
//! # 架构分层
//!
//! - `domain`: 领域层，员工记录与组织节点
//! - `core`: 核心层，层级引擎和目录数据源抽象
//! - `infrastructure`: 基础设施层，目录文件与日志
//! - `application`: 应用层，服务编排与文本输出

// 领域层
pub mod domain;

// 核心层
pub mod core;

// 基础设施层
pub mod infrastructure;

// 应用层
pub mod application;

pub mod errors;

pub use domain::{EmployeeId, EmployeeRecord, NodeDefaults, OrgNode, OrgStats};

pub use crate::core::config::EngineConfig;
pub use crate::core::directory::{DirectorySource, MemoryDirectory};
pub use crate::core::hierarchy::{
    build_hierarchy, build_hierarchy_with, descendants, detached_nodes, find_node, get_children,
    get_roots, reporting_chain,
};
pub use crate::core::integrity::{check_directory, DataQualityIssue, IntegrityReport};
pub use crate::core::search::{filter_by_search, visible_nodes, ViewMode};
pub use crate::core::stats::compute_stats;
pub use crate::core::view_state::{
    create_view_state, is_expanded, toggle_expanded, SharedViewState, ViewState,
};

pub use infrastructure::logger;
pub use infrastructure::FileDirectory;

pub use application::{HierarchySnapshot, OrgChartService, ProfileView};

pub use errors::{OrgChartError, Result};

/// 引擎版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
