use semver_core::models::{BuildInfo, ConfigError, Version};
use semver_core::services::config_service::{
    ConfigService, BUILD_TIME_VAR, BUILD_USER_VAR, BUILD_VERSION_VAR, PROGRAM_NAME_VAR,
};
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

fn temp_env_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "semver-core-{}-{}.env",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).expect("写入临时 .env 文件");
    path
}

// ============================================================================
// 版本横幅
// ============================================================================

#[test]
fn test_banner_格式() {
    let info = BuildInfo::new("deployer", Version::new(1, 4, 0))
        .with_build_time("2025-10-05T10:30:45Z")
        .with_build_user("ci");
    assert_eq!(info.banner(), "deployer 1.4.0 2025-10-05T10:30:45Z ci");
}

#[test]
fn test_banner_默认占位值() {
    let info = BuildInfo::new("deployer", Version::new(0, 1, 0));
    assert_eq!(info.banner(), "deployer 0.1.0 unknown unknown");
}

// ============================================================================
// JSON 序列化
// ============================================================================

#[test]
fn test_build_info_json_版本号为字符串() {
    let info = BuildInfo::new("deployer", Version::parse("2.0.0-rc.1+sha.1").unwrap());
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["program"], "deployer");
    assert_eq!(json["version"], "2.0.0-rc.1+sha.1");
    assert_eq!(json["build_time"], "unknown");

    let back: BuildInfo = serde_json::from_value(json).unwrap();
    assert_eq!(back, info);
}

#[test]
fn test_build_info_json_无效版本号() {
    let json = serde_json::json!({
        "program": "deployer",
        "version": "1.2",
        "build_time": "now",
        "build_user": "me",
    });
    assert!(serde_json::from_value::<BuildInfo>(json).is_err());
}

// ============================================================================
// 配置覆盖
// ============================================================================

#[test]
fn test_config_覆盖全部字段() {
    let info = ConfigService::load_build_info_with(lookup(&[
        (PROGRAM_NAME_VAR, "release-bot"),
        (BUILD_VERSION_VAR, "5.0.1"),
        (BUILD_TIME_VAR, "2025-01-01"),
        (BUILD_USER_VAR, "builder"),
    ]))
    .unwrap();

    assert_eq!(info.program, "release-bot");
    assert_eq!(info.version, Version::new(5, 0, 1));
    assert_eq!(info.banner(), "release-bot 5.0.1 2025-01-01 builder");
}

#[test]
fn test_config_无效版本号返回错误() {
    let err = ConfigService::load_build_info_with(lookup(&[(BUILD_VERSION_VAR, "1.2.x")]))
        .unwrap_err();
    match err {
        ConfigError::InvalidVersion { value, source } => {
            assert_eq!(value, "1.2.x");
            assert_eq!(source.offending_input(), "x");
        }
        other => panic!("期望 InvalidVersion, 实际: {:?}", other),
    }
}

#[test]
fn test_config_从env文件加载() {
    if std::env::var(BUILD_VERSION_VAR).is_ok() || std::env::var(BUILD_USER_VAR).is_ok() {
        // 进程环境优先, 无法验证文件内容
        return;
    }

    let path = temp_env_file(
        "load",
        "# 构建信息\nBUILD_VERSION=7.1.0-beta.3\nBUILD_USER=nightly\n",
    );
    let result = ConfigService::load_build_info_from(&path);
    let _ = std::fs::remove_file(&path);

    let info = result.unwrap();
    assert_eq!(info.version.to_string(), "7.1.0-beta.3");
    assert_eq!(info.build_user, "nightly");
}

#[test]
fn test_config_env文件不存在() {
    let path = std::env::temp_dir().join("semver-core-does-not-exist.env");
    let err = ConfigService::load_build_info_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
