//! 测试公共模块
//!
//! 提供版本号构造与渲染的小工具, 避免在每个测试中重复 unwrap。

#![allow(dead_code)]

use semver_core::models::Version;

/// 解析版本号, 失败时带上输入直接 panic
pub fn v(text: &str) -> Version {
    Version::parse(text).unwrap_or_else(|e| panic!("测试数据无效 '{}': {}", text, e))
}

/// 批量解析
pub fn versions(texts: &[&str]) -> Vec<Version> {
    texts.iter().map(|t| v(t)).collect()
}

/// 渲染为规范字符串列表
pub fn render(versions: &[Version]) -> Vec<String> {
    versions.iter().map(|v| v.to_string()).collect()
}
