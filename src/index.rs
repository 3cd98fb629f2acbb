//! barrel 文件（`<outputPath>/index.ts`）维护：
//! - 不存在时按平台写入基础 `Icon` 组件模板
//! - 追加 export 行，已存在的行不重复写入

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::{
    config::{JsonConfig, Platform, ProjectPaths},
    naming::export_line,
};

const REACT_INDEX_TEMPLATE: &str = include_str!("assets/react_index.ts");
const REACT_NATIVE_INDEX_TEMPLATE: &str = include_str!("assets/react_native_index.ts");

fn index_template(platform: Platform) -> &'static str {
    match platform {
        Platform::Native => REACT_NATIVE_INDEX_TEMPLATE,
        Platform::Web => REACT_INDEX_TEMPLATE,
    }
}

/// 确保输出目录与 index 文件存在；已有的 index 文件不会被覆盖
pub(crate) fn ensure_index_file(paths: &ProjectPaths, config: &JsonConfig) -> Result<PathBuf> {
    let index_path = paths.index_path(config);
    let out_dir = paths.output_dir(config);
    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("创建输出目录失败: {}", out_dir.display()))?;
    }
    if !index_path.exists() {
        fs::write(&index_path, index_template(config.platform))
            .with_context(|| format!("写入 index 文件失败: {}", index_path.display()))?;
        log::info!("created {}", index_path.display());
    }
    Ok(index_path)
}

/// 追加图标的 export 行；返回是否实际写入
pub(crate) fn append_icon_export(
    paths: &ProjectPaths,
    config: &JsonConfig,
    icon_name: &str,
) -> Result<bool> {
    let index_path = paths.index_path(config);
    let existing = fs::read_to_string(&index_path)
        .with_context(|| format!("读取 index 文件失败: {}", index_path.display()))?;
    let line = export_line(config.platform, icon_name);

    if existing.split('\n').any(|l| l.trim() == line) {
        log::debug!("export for {} already present", icon_name);
        return Ok(false);
    }

    let needs_newline = !existing.is_empty() && !existing.ends_with('\n');
    let content = if needs_newline {
        format!("\n{}\n", line)
    } else {
        format!("{}\n", line)
    };

    let mut file = OpenOptions::new()
        .append(true)
        .open(&index_path)
        .with_context(|| format!("打开 index 文件失败: {}", index_path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("写入 index 文件失败: {}", index_path.display()))?;
    Ok(true)
}

/// `<outputPath>/<iconName>.tsx` 是否已存在
pub(crate) fn icon_file_exists(paths: &ProjectPaths, config: &JsonConfig, icon_name: &str) -> bool {
    paths.icon_path(config, icon_name).exists()
}
