//! 图标源模块：
//! - `IconStore`：列出可用图标名、按名称读取 SVG 文本
//! - `BundledStore`：编译期内置的图标集
//! - `DirStore`：磁盘目录（如 `node_modules/pixelarticons/svg`）

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use include_dir::{include_dir, Dir};
use walkdir::WalkDir;

static BUNDLED_ICONS: Dir = include_dir!("$CARGO_MANIFEST_DIR/icons");

pub(crate) trait IconStore {
    /// 所有图标名（不含 `.svg`），按名称排序
    fn names(&self) -> Result<Vec<String>>;
    /// 读取图标 SVG 文本；不存在时返回 `None`
    fn read(&self, name: &str) -> Result<Option<String>>;
    /// 用于日志输出的来源描述
    fn describe(&self) -> String;
}

/// 内置图标集
#[derive(Debug, Default)]
pub(crate) struct BundledStore;

impl IconStore for BundledStore {
    fn names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = BUNDLED_ICONS
            .files()
            .filter(|f| is_svg(f.path()))
            .filter_map(|f| svg_stem(f.path()))
            .collect();
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<Option<String>> {
        let Some(file) = BUNDLED_ICONS.get_file(format!("{}.svg", name)) else {
            return Ok(None);
        };
        let text = file
            .contents_utf8()
            .with_context(|| format!("内置图标不是 UTF-8 文本: {}", name))?;
        Ok(Some(text.to_string()))
    }

    fn describe(&self) -> String {
        "内置图标集".to_string()
    }
}

/// 磁盘上的 SVG 目录（仅扫描第一层）
#[derive(Debug, Clone)]
pub(crate) struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entries(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            bail!(
                "找不到 SVG 图标目录: {}。可运行 npm install pixelarticons 或通过 --icons-dir 指定",
                self.dir.display()
            );
        }
        let mut entries: Vec<PathBuf> = WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_svg(e.path()))
            .map(|e| e.into_path())
            .collect();
        entries.sort();
        Ok(entries)
    }
}

impl IconStore for DirStore {
    fn names(&self) -> Result<Vec<String>> {
        Ok(self
            .entries()?
            .iter()
            .filter_map(|p| svg_stem(p))
            .collect())
    }

    fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.dir.join(format!("{}.svg", name));
        if !path.is_file() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("读取 SVG 失败: {}", path.display()))?;
        Ok(Some(text))
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension().map(|ext| ext == "svg").unwrap_or(false)
}

fn svg_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
