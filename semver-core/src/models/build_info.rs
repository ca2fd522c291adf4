//! 构建信息数据模型
//!
//! 构建时注入的程序名、版本号、构建时间与构建用户。
//! 以显式值的形式传递给需要它的组件, 不使用进程级全局变量。

use crate::models::errors::ConfigError;
use crate::models::version::Version;
use serde::{Deserialize, Serialize};

/// 默认程序名
pub const DEFAULT_PROGRAM: &str = env!("CARGO_PKG_NAME");

/// 未注入构建时间/用户时的占位值
pub const UNKNOWN: &str = "unknown";

/// 构建信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// 程序名
    pub program: String,
    /// 当前进程的版本号
    pub version: Version,
    /// 构建时间 (原样透传)
    pub build_time: String,
    /// 构建用户
    pub build_user: String,
}

impl BuildInfo {
    /// 创建构建信息, 构建时间与用户为占位值
    pub fn new(program: impl Into<String>, version: Version) -> Self {
        Self {
            program: program.into(),
            version,
            build_time: UNKNOWN.to_string(),
            build_user: UNKNOWN.to_string(),
        }
    }

    /// 设置构建时间
    pub fn with_build_time(mut self, build_time: impl Into<String>) -> Self {
        self.build_time = build_time.into();
        self
    }

    /// 设置构建用户
    pub fn with_build_user(mut self, build_user: impl Into<String>) -> Self {
        self.build_user = build_user.into();
        self
    }

    /// 从编译期注入的常量构建
    ///
    /// 读取:
    /// - SEMVER_CORE_BUILD_VERSION: 版本号 (默认: CARGO_PKG_VERSION)
    /// - SEMVER_CORE_BUILD_TIME: 构建时间 (默认: unknown)
    /// - SEMVER_CORE_BUILD_USER: 构建用户 (默认: unknown)
    ///
    /// # 错误
    /// 注入的版本号无法解析时返回 `InvalidVersion`, 这意味着构建流水线有问题
    pub fn from_compile_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            DEFAULT_PROGRAM,
            option_env!("SEMVER_CORE_BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")),
            option_env!("SEMVER_CORE_BUILD_TIME").unwrap_or(UNKNOWN),
            option_env!("SEMVER_CORE_BUILD_USER").unwrap_or(UNKNOWN),
        )
    }

    /// 由原始字符串构建, 版本号需可解析
    pub fn from_parts(
        program: &str,
        version: &str,
        build_time: &str,
        build_user: &str,
    ) -> Result<Self, ConfigError> {
        let parsed = Version::parse(version).map_err(|source| ConfigError::InvalidVersion {
            value: version.to_string(),
            source,
        })?;

        Ok(Self::new(program, parsed)
            .with_build_time(build_time)
            .with_build_user(build_user))
    }

    /// 版本横幅: "{program} {version} {buildTime} {buildUser}"
    pub fn banner(&self) -> String {
        format!(
            "{} {} {} {}",
            self.program, self.version, self.build_time, self.build_user
        )
    }
}
