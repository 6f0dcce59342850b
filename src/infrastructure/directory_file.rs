//! 文件目录数据源
//!
//! 从 YAML 或 JSON 文件加载员工目录快照。文件内容可以是记录列表，
//! 也可以是带 `employees` 字段的对象。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::directory::DirectorySource;
use crate::domain::EmployeeRecord;
use crate::errors::{OrgChartError, Result};

/// 目录文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryFormat {
    Yaml,
    Json,
}

impl DirectoryFormat {
    /// 根据扩展名判断格式
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(DirectoryFormat::Yaml),
            Some("json") => Ok(DirectoryFormat::Json),
            _ => Err(OrgChartError::ConfigError(format!(
                "unsupported directory file: {}",
                path.display()
            ))),
        }
    }
}

#[derive(Deserialize)]
struct WrappedDirectory {
    employees: Vec<EmployeeRecord>,
}

/// 解析目录文本
///
/// 先按顶层结构分派到列表或 `employees` 对象，解析错误保留记录级的原始信息。
pub fn parse_directory(content: &str, format: DirectoryFormat) -> Result<Vec<EmployeeRecord>> {
    match format {
        DirectoryFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content)?;
            if value.is_sequence() {
                Ok(serde_yaml::from_value(value)?)
            } else {
                Ok(serde_yaml::from_value::<WrappedDirectory>(value)?.employees)
            }
        }
        DirectoryFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            if value.is_array() {
                Ok(serde_json::from_value(value)?)
            } else {
                Ok(serde_json::from_value::<WrappedDirectory>(value)?.employees)
            }
        }
    }
}

/// 文件目录
///
/// 每次加载都重新读取文件，文件变化后刷新即可得到新快照
#[derive(Debug, Clone)]
pub struct FileDirectory {
    path: PathBuf,
    format: DirectoryFormat,
}

impl FileDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = DirectoryFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DirectorySource for FileDirectory {
    async fn load_directory(&self) -> Result<Vec<EmployeeRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            OrgChartError::DirectoryError(format!("{}: {}", self.path.display(), e))
        })?;
        let records = parse_directory(&content, self.format)?;
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "directory file loaded"
        );
        Ok(records)
    }
}
