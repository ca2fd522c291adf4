use semver_core::models::Version;
use semver_core::utils::version::{extract_version, satisfies, validate_version};

// ============================================================================
// extract_version 测试
// ============================================================================

#[test]
fn test_extract_version_带v前缀() {
    assert_eq!(extract_version("node v20.10.0"), Some(Version::new(20, 10, 0)));
}

#[test]
fn test_extract_version_多行输出取第一个() {
    let output = "tool 2.1.0\nruntime 3.0.0\n";
    assert_eq!(extract_version(output), Some(Version::new(2, 1, 0)));
}

#[test]
fn test_extract_version_保留预发布与元数据() {
    let extracted = extract_version("deployer version 1.2.3-rc.1+build.9 (linux)").unwrap();
    assert_eq!(extracted.pre_release, "rc.1");
    assert_eq!(extracted.build_metadata, "build.9");
}

#[test]
fn test_extract_version_四段不截取() {
    assert_eq!(extract_version("build 1.2.3.4"), None);
    assert_eq!(
        extract_version("addr 192.168.0.1 version 0.9.1"),
        Some(Version::new(0, 9, 1))
    );
}

#[test]
fn test_extract_version_无版本号() {
    assert_eq!(extract_version("command not found"), None);
    assert_eq!(extract_version("Python 3.11"), None);
}

// ============================================================================
// 最低版本要求
// ============================================================================

#[test]
fn test_satisfies_边界() {
    let minimum = Version::new(1, 4, 0);
    assert!(satisfies(&Version::new(1, 4, 0), &minimum));
    assert!(satisfies(&Version::new(1, 10, 0), &minimum));
    assert!(!satisfies(&Version::new(1, 3, 99), &minimum));
    assert!(!satisfies(
        &Version::new(1, 4, 0).with_pre_release("rc.1").unwrap(),
        &minimum
    ));
}

#[test]
fn test_validate_version_无效输入() {
    assert!(!validate_version("latest", "1.0.0"));
    assert!(!validate_version("1.0.0", "one.zero.zero"));
}
