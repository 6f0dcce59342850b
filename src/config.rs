use std::path::PathBuf;

use clap::Parser;

use orgchart::logger::{LogConfig, LogFormat};
use orgchart::{EngineConfig, NodeDefaults, ViewMode};

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Build and browse an org chart from a flat employee directory"
)]
pub struct AppConfig {
    /// 员工目录文件（.yaml / .yml / .json）
    #[arg(long, env = "ORGCHART_DIRECTORY")]
    pub directory: PathBuf,

    /// 引擎配置文件（YAML），命令行参数优先
    #[arg(long, env = "ORGCHART_CONFIG")]
    pub config: Option<PathBuf>,

    /// 渲染模式: tree, list
    #[arg(long, env = "ORGCHART_MODE")]
    pub mode: Option<ViewMode>,

    /// 列表模式的搜索词
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// 展开全部节点
    #[arg(long)]
    pub expand_all: bool,

    /// 显示某位员工的档案
    #[arg(long)]
    pub profile: Option<String>,

    /// 目录未通过完整性检查时失败
    #[arg(long, env = "ORGCHART_STRICT")]
    pub strict: bool,

    /// 缺省职位
    #[arg(long, env = "ORGCHART_DEFAULT_TITLE")]
    pub default_title: Option<String>,

    /// 缺省部门
    #[arg(long, env = "ORGCHART_DEFAULT_DEPARTMENT")]
    pub default_department: Option<String>,

    /// 日志格式: pretty, compact, json
    #[arg(long, env = "LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,

    /// 未设置 RUST_LOG 时输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    pub fn log_config(&self) -> LogConfig {
        let config = LogConfig::default().with_format(self.log_format);
        if self.verbose {
            config.with_directive("orgchart=debug,metrics=info,warn")
        } else {
            config
        }
    }

    /// 将命令行参数合并到引擎配置上
    pub fn engine_config(&self, base: EngineConfig) -> EngineConfig {
        let defaults = NodeDefaults {
            title: self
                .default_title
                .clone()
                .unwrap_or_else(|| base.defaults.title.clone()),
            department: self
                .default_department
                .clone()
                .unwrap_or_else(|| base.defaults.department.clone()),
        };

        EngineConfig {
            view_mode: self.mode.unwrap_or(base.view_mode),
            expand_all: self.expand_all || base.expand_all,
            ..base
        }
        .with_defaults(defaults)
    }
}
