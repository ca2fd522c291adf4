use std::num::ParseIntError;
use thiserror::Error;

/// 版本号解析相关错误
///
/// 只有两种失败场景, 均同步返回给调用方, 解析器内部不做任何恢复。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// 不是 major.minor.patch 三段格式
    ///
    /// 携带原始输入, 便于定位问题
    #[error("version '{0}' is not in dotted-triple format")]
    InvalidFormat(String),

    /// 数字段不是合法的十进制整数
    ///
    /// 去除预发布与构建元数据后, major/minor/patch 中某一段无法解析。
    /// 底层的 `ParseIntError` 原样作为 source 保留。
    #[error("invalid numeric segment '{segment}': {source}")]
    InvalidNumber {
        /// 出错的数字段原文
        segment: String,
        #[source]
        source: ParseIntError,
    },

    /// 预发布标识中含有 `+`
    ///
    /// 输出后 `+` 之后的部分会被当作构建元数据, 无法往返
    #[error("pre-release '{0}' must not contain '+'")]
    InvalidPreRelease(String),

    /// 升级时数字段已达到 u64 上限
    #[error("cannot bump {field} of version '{version}': value overflows u64")]
    BumpOverflow {
        /// 溢出的字段: major/minor/patch
        field: &'static str,
        /// 升级前的版本号
        version: String,
    },
}

impl VersionError {
    /// 出错时的原始片段 (整串输入、单个数字段或预发布标识)
    pub fn offending_input(&self) -> &str {
        match self {
            VersionError::InvalidFormat(input) => input,
            VersionError::InvalidNumber { segment, .. } => segment,
            VersionError::InvalidPreRelease(pre_release) => pre_release,
            VersionError::BumpOverflow { version, .. } => version,
        }
    }
}

/// 构建信息配置相关错误
///
/// 处理从编译期常量、环境变量或 .env 文件加载构建信息时的失败场景
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置中的版本号无法解析
    ///
    /// 构建流水线注入了格式错误的版本号
    #[error("configured version '{value}' is invalid: {source}")]
    InvalidVersion {
        value: String,
        #[source]
        source: VersionError,
    },

    /// 配置文件读取失败
    #[error("failed to read configuration: {0}")]
    Io(String),
}

/// 实现从dotenvy::Error到ConfigError的转换
impl From<dotenvy::Error> for ConfigError {
    fn from(err: dotenvy::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}
