//! 语义化版本解析与排序引擎
//!
//! - 解析 `major.minor.patch[-preRelease][+buildMetadata]` 并规范化输出
//! - 定义版本号的全序关系 (构建元数据不参与比较)
//! - 稳定排序、过期检查与构建信息配置
//!
//! ```
//! use semver_core::{compare, Version};
//! use std::cmp::Ordering;
//!
//! let a = Version::parse("1.0.0-alpha").unwrap();
//! let b = Version::parse("1.0.0").unwrap();
//! assert_eq!(compare(&a, &b), Ordering::Less);
//! ```

pub mod models;
pub mod services;
pub mod utils;

pub use models::{BuildInfo, ConfigError, Version, VersionError};
pub use services::comparator::{compare, is_outdated, latest, less_than, sort};
