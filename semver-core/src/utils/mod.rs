//! 工具模块
//!
//! - `logger`: 日志系统初始化
//! - `version`: 版本号提取与最低版本检查

pub mod logger;
pub mod version;
