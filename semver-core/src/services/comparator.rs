//! 版本比较服务
//!
//! 定义版本号之间的全序关系:
//! - 数字三元组 (major, minor, patch) 逐位比较
//! - 数字相同时, 正式版高于预发布版
//! - 均为预发布时, 按 `.` 拆分的标识逐个比较
//! - 构建元数据不参与比较
//!
//! 预发布标识的比较规则: 双方都能解析为整数时按数值比较,
//! 否则 (包括一方为数字一方为字母) 按原始字符串字典序比较。
//! 这与严格的 SemVer 规则 (数字标识总是低于字母标识) 不同, 保留现有行为。

use crate::models::version::Version;
use std::cmp::Ordering;

/// 比较两个版本号的优先级
pub fn compare(a: &Version, b: &Version) -> Ordering {
    let left = [a.major, a.minor, a.patch];
    let right = [b.major, b.minor, b.patch];

    for (l, r) in left.iter().zip(right.iter()) {
        match l.cmp(r) {
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }

    match (a.is_pre_release(), b.is_pre_release()) {
        (false, false) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => compare_pre_release(&a.pre_release, &b.pre_release),
    }
}

/// `a` 是否低于 `b`
pub fn less_than(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Less
}

/// 升序稳定排序, 相等的版本保持原有相对顺序
pub fn sort(versions: &mut [Version]) {
    versions.sort_by(compare);
}

/// 当前版本是否落后于最新版本
pub fn is_outdated(current: &Version, latest: &Version) -> bool {
    less_than(current, latest)
}

/// 返回集合中优先级最高的版本, 相等时取靠后的一个
pub fn latest(versions: &[Version]) -> Option<&Version> {
    versions.iter().max_by(|a, b| compare(a, b))
}

/// 预发布段比较
///
/// 公共前缀相同时, 标识更多的一方更高
fn compare_pre_release(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match compare_identifier(l, r) {
                Ordering::Equal => continue,
                ordering => return ordering,
            },
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(l), Ok(r)) => l.cmp(&r),
        _ => a.cmp(b),
    }
}
