//! 配置与路径模块：
//! - 定义 `JsonConfig`（`pix31.json`）与 `Platform`
//! - `ProjectPaths` 以显式的项目根目录解析所有读写路径
//! - 提供配置的读取与写出

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub(crate) const LIB_NAME: &str = "pix31";
pub(crate) const CONFIG_FILE_NAME: &str = "pix31.json";
pub(crate) const INDEX_FILE_NAME: &str = "index.ts";
pub(crate) const COMPONENT_EXTENSION: &str = "tsx";
pub(crate) const DEFAULT_OUTPUT_PATH: &str = "app/components/icons";

/// 目标平台
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Platform {
    Web,
    Native,
}

impl Platform {
    /// 面向用户的平台名称
    pub(crate) fn label(self) -> &'static str {
        match self {
            Platform::Web => "React",
            Platform::Native => "React Native",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 项目根目录下的 `pix31.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonConfig {
    pub(crate) platform: Platform,
    /// 组件输出目录（相对项目根目录）
    pub(crate) output_path: String,
}

/// 所有文件系统路径都从这里推导，不依赖进程当前目录
#[derive(Debug, Clone)]
pub(crate) struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub(crate) fn package_json(&self) -> PathBuf {
        self.root.join("package.json")
    }

    pub(crate) fn output_dir(&self, config: &JsonConfig) -> PathBuf {
        self.root.join(&config.output_path)
    }

    pub(crate) fn index_path(&self, config: &JsonConfig) -> PathBuf {
        self.output_dir(config).join(INDEX_FILE_NAME)
    }

    pub(crate) fn icon_path(&self, config: &JsonConfig, icon_name: &str) -> PathBuf {
        self.output_dir(config)
            .join(format!("{}.{}", icon_name, COMPONENT_EXTENSION))
    }
}

/// 读取配置；文件不存在返回 `None`
pub(crate) fn read_config(paths: &ProjectPaths) -> Result<Option<JsonConfig>> {
    let path = paths.config_path();
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path)
        .with_context(|| format!("读取配置失败: {}", path.display()))?;
    let config: JsonConfig = serde_json::from_str(&text)
        .with_context(|| format!("解析配置失败: {}", path.display()))?;
    log::debug!("loaded {}: {:?}", path.display(), config);
    Ok(Some(config))
}

/// 以两空格缩进写出配置
pub(crate) fn write_config(paths: &ProjectPaths, config: &JsonConfig) -> Result<()> {
    let path = paths.config_path();
    let text = serde_json::to_string_pretty(config)?;
    fs::write(&path, text).with_context(|| format!("写入配置失败: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path());
        assert!(read_config(&paths).unwrap().is_none());
    }

    #[test]
    fn reads_camel_case_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "platform": "native", "outputPath": "src/icons" }"#,
        )
        .unwrap();
        let paths = ProjectPaths::new(dir.path());
        let config = read_config(&paths).unwrap().unwrap();
        assert_eq!(config.platform, Platform::Native);
        assert_eq!(config.output_path, "src/icons");
        assert_eq!(paths.index_path(&config), dir.path().join("src/icons/index.ts"));
        assert_eq!(
            paths.icon_path(&config, "heart"),
            dir.path().join("src/icons/heart.tsx")
        );
    }

    #[test]
    fn round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path());
        let config = JsonConfig {
            platform: Platform::Web,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        };
        write_config(&paths, &config).unwrap();
        let text = fs::read_to_string(paths.config_path()).unwrap();
        assert!(text.contains("\"outputPath\": \"app/components/icons\""));
        assert!(text.contains("\"platform\": \"web\""));
        assert_eq!(read_config(&paths).unwrap(), Some(config));
    }

    #[test]
    fn rejects_unknown_platform() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "platform": "vue", "outputPath": "src/icons" }"#,
        )
        .unwrap();
        assert!(read_config(&ProjectPaths::new(dir.path())).is_err());
    }
}
