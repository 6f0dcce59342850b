//! 应用层：业务编排
//!
//! 组织架构服务与文本输出

pub mod org_chart;
pub mod output;

pub use org_chart::{HierarchySnapshot, OrgChartService, ProfileView};
