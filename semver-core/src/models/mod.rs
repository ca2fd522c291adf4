//! 数据模型模块
//!
//! 包含所有核心数据结构:
//! - errors: 错误类型定义 (版本解析错误、配置错误)
//! - version: 版本号结构与文本表示 (解析/规范化输出/升级)
//! - build_info: 构建信息 (程序名、版本号、构建时间与用户)

pub mod build_info;
pub mod errors;
pub mod version;

// 重导出常用类型,简化外部引用
pub use build_info::BuildInfo;
pub use errors::{ConfigError, VersionError};
pub use version::Version;
