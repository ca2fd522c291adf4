//! 服务层模块
//!
//! - `comparator`: 版本比较与排序
//! - `config_service`: 构建信息配置加载
//!
//! # 数据流向
//!
//! ```text
//! 文本 ──parse──▶ Version ──compare/sort──▶ Version ──Display──▶ 文本
//! ```
//!
//! # 使用示例
//!
//! ```
//! use semver_core::models::Version;
//! use semver_core::services::comparator;
//!
//! let mut versions: Vec<Version> = ["1.2.0", "1.0.0", "1.1.0-beta", "1.1.0"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! comparator::sort(&mut versions);
//! assert_eq!(versions[1].to_string(), "1.1.0-beta");
//! ```

pub mod comparator;
pub mod config_service;

pub use config_service::ConfigService;
