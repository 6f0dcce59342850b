//! 日志初始化与构建耗时记录
//!
//! 日志全部写到 stderr，stdout 只留给树、列表和档案输出。
//! 过滤规则取自 `RUST_LOG`，未设置时使用 `LogConfig::default_directive`。
//! 构建耗时以 `metrics` 为 target 记录，可单独过滤。

use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未设置 `RUST_LOG` 时的过滤规则
pub const DEFAULT_DIRECTIVE: &str = "orgchart=info,metrics=info,warn";

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 多行缩进格式，适合本地调试
    #[default]
    Pretty,
    /// 单行格式，命令行默认值
    Compact,
    /// JSON 行，便于交给日志收集
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "unknown log format '{}', expected pretty, compact or json",
                other
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        })
    }
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// 终端颜色，JSON 格式下忽略
    pub ansi: bool,
    /// `RUST_LOG` 缺失或无效时使用的过滤规则
    pub default_directive: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            ansi: true,
            default_directive: DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl LogConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = directive.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }
}

/// 初始化全局 subscriber，重复初始化时忽略
pub fn init(config: LogConfig) {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(layer.pretty().with_ansi(config.ansi))
            .try_init(),
        LogFormat::Compact => registry
            .with(layer.compact().with_ansi(config.ansi))
            .try_init(),
        LogFormat::Json => registry
            .with(layer.json().with_current_span(false))
            .try_init(),
    };

    if let Err(err) = result {
        tracing::debug!(error = %err, "logger already initialized");
    }
}

/// 构建计时器，离开作用域时在 `metrics` target 下记录耗时
pub struct Timer {
    operation: &'static str,
    start: Instant,
    records: Option<usize>,
}

impl Timer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
            records: None,
        }
    }

    /// 附带本次处理的目录记录数
    pub fn with_records(mut self, records: usize) -> Self {
        self.records = Some(records);
        self
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            target: "metrics",
            operation = self.operation,
            records = self.records,
            elapsed_ms = %format!("{:.2}", elapsed_ms),
            "operation completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!(" Compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_log_config_builders() {
        let config = LogConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.default_directive, DEFAULT_DIRECTIVE);

        let config = LogConfig::default()
            .with_format(LogFormat::Compact)
            .with_directive("orgchart=debug");
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.default_directive, "orgchart=debug");
    }

    #[test]
    fn test_timer_records() {
        let timer = Timer::new("build_hierarchy");
        assert_eq!(timer.operation, "build_hierarchy");
        assert!(timer.records.is_none());

        let timer = Timer::new("build_hierarchy").with_records(42);
        assert_eq!(timer.records, Some(42));
    }
}
