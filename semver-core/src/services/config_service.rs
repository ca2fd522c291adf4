use crate::models::{BuildInfo, ConfigError};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// 运行时可覆盖构建信息的环境变量
pub const PROGRAM_NAME_VAR: &str = "PROGRAM_NAME";
pub const BUILD_VERSION_VAR: &str = "BUILD_VERSION";
pub const BUILD_TIME_VAR: &str = "BUILD_TIME";
pub const BUILD_USER_VAR: &str = "BUILD_USER";

/// 配置服务
///
/// 负责组装当前进程的构建信息, 职责单一:
/// - 以编译期注入的常量为基础
/// - 从 .env 文件读取覆盖项
/// - 进程环境变量优先于 .env 文件
pub struct ConfigService;

impl ConfigService {
    /// 获取 .env 文件路径
    ///
    /// 查找顺序:
    /// 1. 当前工作目录的 .env
    /// 2. 上层目录(工作区根目录)的 .env
    fn env_file_path() -> Option<PathBuf> {
        let cwd = env::current_dir().ok()?;

        let env_path = cwd.join(".env");
        if env_path.exists() {
            return Some(env_path);
        }

        cwd.parent()
            .map(|parent| parent.join(".env"))
            .filter(|path| path.exists())
    }

    /// 读取 .env 文件为 HashMap, 不修改进程环境
    fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        Ok(vars)
    }

    /// 加载当前进程的构建信息
    ///
    /// # 错误处理
    /// - .env 文件不存在时仅使用编译期常量与进程环境(不报错)
    /// - .env 文件格式错误时返回 Io
    /// - 版本号无法解析时返回 InvalidVersion
    pub fn load_build_info() -> Result<BuildInfo, ConfigError> {
        let file_vars = match Self::env_file_path() {
            Some(path) => {
                let vars = Self::read_env_file(&path)?;
                tracing::info!(path = %path.display(), count = vars.len(), "已加载 .env 配置");
                vars
            }
            None => {
                tracing::debug!("未找到 .env 文件,使用编译期构建信息");
                HashMap::new()
            }
        };

        Self::load_build_info_with(|key| {
            env::var(key).ok().or_else(|| file_vars.get(key).cloned())
        })
    }

    /// 从指定 .env 文件加载构建信息, 进程环境变量仍然优先
    pub fn load_build_info_from(path: &Path) -> Result<BuildInfo, ConfigError> {
        let file_vars = Self::read_env_file(path)?;
        Self::load_build_info_with(|key| {
            env::var(key).ok().or_else(|| file_vars.get(key).cloned())
        })
    }

    /// 以编译期构建信息为基础, 应用查找函数提供的覆盖项
    ///
    /// 值为空字符串的变量视为未设置
    pub fn load_build_info_with<F>(lookup: F) -> Result<BuildInfo, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = BuildInfo::from_compile_env()?;
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let program = get(PROGRAM_NAME_VAR).unwrap_or(base.program);
        let build_time = get(BUILD_TIME_VAR).unwrap_or(base.build_time);
        let build_user = get(BUILD_USER_VAR).unwrap_or(base.build_user);

        let info = match get(BUILD_VERSION_VAR) {
            Some(version) => {
                let info = BuildInfo::from_parts(&program, version.trim(), &build_time, &build_user);
                if let Err(ref err) = info {
                    tracing::warn!(error = %err, "构建版本号覆盖项无效");
                }
                info?
            }
            None => BuildInfo::new(program, base.version)
                .with_build_time(build_time)
                .with_build_user(build_user),
        };

        tracing::info!(banner = %info.banner(), "已加载构建信息");

        Ok(info)
    }
}
