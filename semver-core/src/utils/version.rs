//! 版本工具
//!
//! 面向嵌入方的便捷函数:
//! - 从命令输出中提取版本号
//! - 最低版本要求检查

use crate::models::Version;
use crate::services::comparator;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;
use tracing::{debug, warn};

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // 前缀排除数字和点, 避免从 "1.2.3.4" 的中间截取;
        // 多余的数字段一并捕获, 交由解析器拒绝
        Regex::new(
            r"(?:^|[^0-9.])(\d+\.\d+\.\d+(?:\.\d+)*(?:-[0-9A-Za-z][0-9A-Za-z.\-]*)?(?:\+[0-9A-Za-z][0-9A-Za-z.\-]*)?)",
        )
        .expect("版本号正则表达式有效")
    })
}

/// 从命令输出中提取第一个可解析的版本号
///
/// 支持的输出格式示例:
/// - "v20.10.0" -> 20.10.0
/// - "git version 2.39.0" -> 2.39.0
/// - "Redis server v=7.0.12 sha=00000000" -> 7.0.12
/// - "tool 1.2.3-alpha.1+build.7" -> 1.2.3-alpha.1+build.7
pub fn extract_version(output: &str) -> Option<Version> {
    for captures in version_pattern().captures_iter(output) {
        let Some(candidate) = captures.get(1) else {
            continue;
        };
        // 句末的 '.' 或 '-' 不属于版本号
        let text = candidate.as_str().trim_end_matches(['.', '-']);
        match Version::parse(text) {
            Ok(version) => {
                debug!(input = output, version = %version, "检测到版本号");
                return Some(version);
            }
            Err(err) => debug!(candidate = text, error = %err, "跳过无效的版本号候选"),
        }
    }
    None
}

/// 当前版本是否满足最低版本要求
pub fn satisfies(current: &Version, minimum: &Version) -> bool {
    comparator::compare(current, minimum) != Ordering::Less
}

/// 验证版本字符串是否满足最低版本要求
///
/// 任一方无法解析时记录警告并返回 false
pub fn validate_version(current: &str, minimum: &str) -> bool {
    let current_version = match Version::parse(current) {
        Ok(version) => version,
        Err(err) => {
            warn!("无法解析当前版本 '{}': {}", current, err);
            return false;
        }
    };

    let minimum_version = match Version::parse(minimum) {
        Ok(version) => version,
        Err(err) => {
            warn!("无法解析最低版本要求 '{}': {}", minimum, err);
            return false;
        }
    };

    let matches = satisfies(&current_version, &minimum_version);
    debug!(
        "版本比较结果: {} {} {} -> {}",
        current,
        if matches { "✓" } else { "✗" },
        minimum,
        matches
    );

    matches
}
