//! 版本号数据模型
//!
//! 负责版本字符串与结构化值之间的转换:
//! - 解析 `major.minor.patch[-preRelease][+buildMetadata]`
//! - 规范化输出 (Display)
//! - 升级操作 (bump major/minor/patch)
//!
//! 排序逻辑位于 `services::comparator`, 本模块只关心文本表示。

use crate::models::errors::VersionError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// 语义化版本号
///
/// `pre_release` 与 `build_metadata` 为空字符串时表示不存在,
/// 存储时不包含前导的 `-` 与 `+`。
///
/// 相等性比较所有字段 (包括构建元数据);
/// 排序忽略构建元数据, 因此不实现 `Ord`, 请使用 [`Version::compare`]。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// 预发布标识, 如 "beta.1"; 不应含有 `+`, 否则输出后无法往返
    pub pre_release: String,
    /// 构建元数据, 仅用于展示
    pub build_metadata: String,
}

impl Version {
    /// 创建不带预发布和元数据的版本号
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: String::new(),
            build_metadata: String::new(),
        }
    }

    /// 设置预发布标识 (不含前导 `-`)
    ///
    /// # 错误
    /// 含有 `+` 时返回 `InvalidPreRelease`: 输出后 `+` 之后的内容会被解析为构建元数据
    pub fn with_pre_release(
        mut self,
        pre_release: impl Into<String>,
    ) -> Result<Self, VersionError> {
        let pre_release = pre_release.into();
        if pre_release.contains('+') {
            return Err(VersionError::InvalidPreRelease(pre_release));
        }
        self.pre_release = pre_release;
        Ok(self)
    }

    /// 设置构建元数据 (不含前导 `+`)
    pub fn with_build_metadata(mut self, build_metadata: impl Into<String>) -> Self {
        self.build_metadata = build_metadata.into();
        self
    }

    /// 从字符串解析版本号
    ///
    /// 解析步骤:
    /// 1. 按 `.` 最多切分为3段, 第3段可能包含属于预发布/元数据的 `.`
    /// 2. 从第3段中剥离第一个 `+` 之后的构建元数据
    /// 3. 再剥离第一个 `-` 之后的预发布标识
    /// 4. 三个数字段按十进制解析
    ///
    /// # 错误
    /// - 段数不为3, 或剥离后 patch 段仍含有 `.` (如 "1.2.3.4"): `InvalidFormat`
    /// - 数字段无法解析: `InvalidNumber`, source 为原始的 `ParseIntError`
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let segments: Vec<&str> = text.splitn(3, '.').collect();
        if segments.len() != 3 {
            debug!(input = text, segments = segments.len(), "版本号段数不正确");
            return Err(VersionError::InvalidFormat(text.to_string()));
        }

        // 元数据先于预发布剥离, 元数据中的 `-` 不会被误认为预发布分隔符
        let (rest, build_metadata) = match segments[2].split_once('+') {
            Some((rest, metadata)) => (rest, metadata),
            None => (segments[2], ""),
        };
        let (patch, pre_release) = match rest.split_once('-') {
            Some((patch, pre)) => (patch, pre),
            None => (rest, ""),
        };

        if patch.contains('.') {
            debug!(input = text, "版本号包含多余的数字段");
            return Err(VersionError::InvalidFormat(text.to_string()));
        }

        Ok(Self {
            major: parse_numeric(segments[0])?,
            minor: parse_numeric(segments[1])?,
            patch: parse_numeric(patch)?,
            pre_release: pre_release.to_string(),
            build_metadata: build_metadata.to_string(),
        })
    }

    /// 是否为预发布版本
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// 是否带有构建元数据
    pub fn has_build_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }

    /// 按版本优先级比较, 忽略构建元数据
    pub fn compare(&self, other: &Version) -> Ordering {
        crate::services::comparator::compare(self, other)
    }

    /// 升级主版本号, 重置 minor/patch/预发布/元数据
    ///
    /// 已达 u64 上限时返回 `BumpOverflow`, 版本号保持不变
    pub fn bump_major(&mut self) -> Result<(), VersionError> {
        self.major = self.incremented(self.major, "major")?;
        self.minor = 0;
        self.patch = 0;
        self.clear_suffixes();
        Ok(())
    }

    /// 升级次版本号, 重置 patch/预发布/元数据
    pub fn bump_minor(&mut self) -> Result<(), VersionError> {
        self.minor = self.incremented(self.minor, "minor")?;
        self.patch = 0;
        self.clear_suffixes();
        Ok(())
    }

    /// 升级修订号, 仅重置预发布/元数据
    pub fn bump_patch(&mut self) -> Result<(), VersionError> {
        self.patch = self.incremented(self.patch, "patch")?;
        self.clear_suffixes();
        Ok(())
    }

    fn incremented(&self, value: u64, field: &'static str) -> Result<u64, VersionError> {
        value.checked_add(1).ok_or_else(|| {
            debug!(version = %self, field, "版本号升级溢出");
            VersionError::BumpOverflow {
                field,
                version: self.to_string(),
            }
        })
    }

    fn clear_suffixes(&mut self) {
        self.pre_release.clear();
        self.build_metadata.clear();
    }
}

fn parse_numeric(segment: &str) -> Result<u64, VersionError> {
    segment.parse::<u64>().map_err(|source| {
        debug!(segment, error = %source, "版本号数字段解析失败");
        VersionError::InvalidNumber {
            segment: segment.to_string(),
            source,
        }
    })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

/// 规范化输出: `major.minor.patch[-preRelease][+buildMetadata]`
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_pre_release() {
            write!(f, "-{}", self.pre_release)?;
        }
        if self.has_build_metadata() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Version::new(major, minor, patch)
    }
}

/// 序列化为规范字符串
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Version::parse(&text).map_err(de::Error::custom)
    }
}
