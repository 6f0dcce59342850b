//! 标准化错误处理
//!
//! 层级引擎本身不会失败；这里的错误只来自目录加载、配置和服务层查询

use thiserror::Error;

use crate::core::integrity::IntegrityReport;

/// 项目主要错误类型
#[derive(Error, Debug)]
pub enum OrgChartError {
    /// 目录数据源错误
    #[error("Directory error: {0}")]
    DirectoryError(String),

    /// 目录内容解析错误
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 节点不存在
    #[error("Employee not found: {0}")]
    NodeNotFound(String),

    /// 严格模式下目录未通过完整性检查
    #[error("Directory failed integrity check with {} issue(s)", .0.len())]
    IntegrityError(IntegrityReport),

    /// 未知错误
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for OrgChartError {
    fn from(err: anyhow::Error) -> Self {
        OrgChartError::Unknown(err.to_string())
    }
}

impl From<std::io::Error> for OrgChartError {
    fn from(err: std::io::Error) -> Self {
        OrgChartError::DirectoryError(err.to_string())
    }
}

impl From<serde_json::Error> for OrgChartError {
    fn from(err: serde_json::Error) -> Self {
        OrgChartError::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for OrgChartError {
    fn from(err: serde_yaml::Error) -> Self {
        OrgChartError::ParseError(err.to_string())
    }
}

/// 项目结果类型别名
pub type Result<T> = std::result::Result<T, OrgChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_directory_error() {
        let err: OrgChartError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml").into();
        assert!(matches!(err, OrgChartError::DirectoryError(_)));
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_integrity_error_message() {
        let err = OrgChartError::IntegrityError(IntegrityReport::default());
        assert_eq!(
            err.to_string(),
            "Directory failed integrity check with 0 issue(s)"
        );
    }
}
