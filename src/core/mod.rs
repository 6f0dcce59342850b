//! 核心层：层级引擎和通用抽象
//!
//! 包含层级构建、搜索过滤、视图状态、统计汇总、完整性检查以及目录数据源抽象

pub mod config;
pub mod directory;
pub mod hierarchy;
pub mod integrity;
pub mod search;
pub mod stats;
pub mod view_state;
