//! 引擎配置

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::search::ViewMode;
use crate::domain::NodeDefaults;
use crate::errors::Result;

/// 层级引擎与视图的配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// 缺省职位、部门的占位值
    pub defaults: NodeDefaults,
    /// 默认渲染模式
    pub view_mode: ViewMode,
    /// 首次构建后是否展开全部节点，而不仅是根节点
    pub expand_all: bool,
}

impl EngineConfig {
    /// 从 YAML 文本解析，缺失的字段取默认值
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// 从 YAML 文件加载
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_yaml_str(&content)
    }

    pub fn with_defaults(mut self, defaults: NodeDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_DEPARTMENT, DEFAULT_TITLE};

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = EngineConfig::from_yaml_str(
            r#"
viewMode: list
defaults:
  department: Unassigned
"#,
        )
        .unwrap();

        assert_eq!(config.view_mode, ViewMode::List);
        assert_eq!(config.defaults.department, "Unassigned");
        assert_eq!(config.defaults.title, DEFAULT_TITLE);
        assert!(!config.expand_all);
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.view_mode, ViewMode::Tree);
        assert_eq!(config.defaults.department, DEFAULT_DEPARTMENT);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(EngineConfig::from_yaml_str("viewMode: [").is_err());
    }
}
