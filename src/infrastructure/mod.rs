//! 基础设施层：外部系统交互
//!
//! 提供目录文件加载与日志能力

pub mod directory_file;
pub mod logger;

pub use directory_file::{parse_directory, DirectoryFormat, FileDirectory};
