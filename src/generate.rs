//! 生成流程编排：
//! - `add_icons`：逐个处理请求的图标（命中 -> 覆盖确认 -> 提取 -> 渲染写出 -> 更新 index；
//!   未命中 -> 相似建议 -> 选择后回到命中流程）
//! - `generate_all`：批量生成整个图标集
//! 单个图标失败只记录并继续，不会中断整批。

use std::fs;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use thiserror::Error;

use crate::{
    config::{JsonConfig, ProjectPaths},
    index::{append_icon_export, ensure_index_file, icon_file_exists},
    naming::component_name,
    prompt::Prompter,
    render::generate_component,
    search::{search_related_file_names, DEFAULT_SUGGESTION_LIMIT},
    store::IconStore,
    svg::{extract_svg_path, extract_svg_paths, SvgError},
    utils::{print_error, print_miss, print_question, print_success, print_warning},
};

#[derive(Debug, Error)]
pub(crate) enum IconError {
    #[error("找不到图标 {0} 的 SVG 源文件")]
    MissingSource(String),
    #[error("无法从 {name} 提取 path 数据: {source}")]
    Extract {
        name: String,
        #[source]
        source: SvgError,
    },
}

/// 一次批量生成的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct GenerationStats {
    pub(crate) total_files: usize,
    /// 成功写出的图标名
    pub(crate) generated: Vec<String>,
    /// 用户取消、拒绝覆盖或没有建议而跳过的请求
    pub(crate) skipped: Vec<String>,
    pub(crate) failed: Vec<String>,
}

impl GenerationStats {
    pub(crate) fn successful_files(&self) -> usize {
        self.generated.len()
    }
}

/// 生成所需的共享上下文
pub(crate) struct GenerateContext<'a> {
    pub(crate) paths: &'a ProjectPaths,
    pub(crate) config: &'a JsonConfig,
    pub(crate) store: &'a dyn IconStore,
}

/// 生成单个组件文件；返回 `false` 表示用户拒绝覆盖
pub(crate) fn generate_icon_component(
    ctx: &GenerateContext<'_>,
    prompter: &mut dyn Prompter,
    icon_name: &str,
) -> Result<bool> {
    let component = component_name(icon_name);

    if icon_file_exists(ctx.paths, ctx.config, icon_name) {
        print_warning(&format!(
            "{} already exists in {}",
            component, ctx.config.output_path
        ));
        if !prompter.confirm_overwrite(&component)? {
            log::debug!("overwrite of {} declined", component);
            return Ok(false);
        }
    }

    let svg = read_source(ctx, icon_name)?;
    let path_data = extract_svg_paths(&svg).map_err(|source| {
        if source.is_parse_failure() {
            log::warn!("{}: malformed SVG", icon_name);
        }
        IconError::Extract {
            name: icon_name.to_string(),
            source,
        }
    })?;
    write_component(ctx, icon_name, &path_data)?;
    Ok(true)
}

fn read_source(ctx: &GenerateContext<'_>, icon_name: &str) -> Result<String> {
    let svg = ctx
        .store
        .read(icon_name)?
        .ok_or_else(|| IconError::MissingSource(icon_name.to_string()))?;
    Ok(svg)
}

/// 渲染并写出组件文件，不做存在性检查
fn write_component(ctx: &GenerateContext<'_>, icon_name: &str, path_data: &[String]) -> Result<()> {
    log::debug!("{}: {} path(s)", icon_name, path_data.len());
    let content = generate_component(ctx.config.platform, &component_name(icon_name), path_data)?;

    let out_dir = ctx.paths.output_dir(ctx.config);
    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("创建输出目录失败: {}", out_dir.display()))?;
    }
    let target = ctx.paths.icon_path(ctx.config, icon_name);
    fs::write(&target, content).with_context(|| format!("写入组件失败: {}", target.display()))?;
    log::info!("wrote {}", target.display());
    Ok(())
}

/// 处理用户请求的图标列表（按输入顺序逐个处理）
pub(crate) fn add_icons(
    ctx: &GenerateContext<'_>,
    prompter: &mut dyn Prompter,
    icons: &[String],
) -> Result<GenerationStats> {
    ensure_index_file(ctx.paths, ctx.config)?;
    let available = ctx.store.names()?;
    log::debug!("{} icons available from {}", available.len(), ctx.store.describe());

    let mut stats = GenerationStats::default();
    for icon in icons {
        stats.total_files += 1;

        if available.iter().any(|name| name == icon) {
            add_found_icon(ctx, prompter, icon, &mut stats);
            continue;
        }

        print_miss(&format!("\"{}\" not found.", icon));
        let suggestions = search_related_file_names(icon, &available, DEFAULT_SUGGESTION_LIMIT);
        if suggestions.is_empty() {
            stats.skipped.push(icon.clone());
            continue;
        }

        print_question("Here are other similar icons:");
        match prompter.select_suggestion(&suggestions) {
            Ok(Some(selected)) => add_found_icon(ctx, prompter, &selected, &mut stats),
            Ok(None) => stats.skipped.push(icon.clone()),
            Err(e) => {
                print_error(&format!("Failed to select a suggestion for \"{}\": {:#}", icon, e));
                stats.failed.push(icon.clone());
            }
        }
    }

    Ok(stats)
}

fn add_found_icon(
    ctx: &GenerateContext<'_>,
    prompter: &mut dyn Prompter,
    icon: &str,
    stats: &mut GenerationStats,
) {
    let component = component_name(icon);
    let result = generate_icon_component(ctx, prompter, icon).and_then(|written| {
        if written {
            append_icon_export(ctx.paths, ctx.config, icon)?;
        }
        Ok(written)
    });

    match result {
        Ok(true) => {
            print_success(&format!("{} ({})", component, ctx.config.platform));
            stats.generated.push(icon.to_string());
        }
        Ok(false) => stats.skipped.push(icon.to_string()),
        Err(e) => {
            print_error(&format!("Failed to generate {}: {:#}", component, e));
            stats.failed.push(icon.to_string());
        }
    }
}

/// 为整个图标集生成组件并更新 index；`force` 为 false 时跳过已存在的文件
pub(crate) fn generate_all(
    ctx: &GenerateContext<'_>,
    force: bool,
    progress: &ProgressBar,
) -> Result<GenerationStats> {
    ensure_index_file(ctx.paths, ctx.config)?;
    let names = ctx.store.names()?;

    let mut stats = GenerationStats {
        total_files: names.len(),
        ..Default::default()
    };
    progress.set_length(names.len() as u64);

    for name in names {
        progress.set_message(name.clone());
        if !force && icon_file_exists(ctx.paths, ctx.config, &name) {
            stats.skipped.push(name);
            progress.inc(1);
            continue;
        }
        let result = read_source(ctx, &name).and_then(|svg| {
            // 批量模式下提取失败只计数
            let Some(path_data) = extract_svg_path(&svg) else {
                return Ok(false);
            };
            write_component(ctx, &name, &path_data)?;
            append_icon_export(ctx.paths, ctx.config, &name)?;
            Ok(true)
        });
        match result {
            Ok(true) => stats.generated.push(name),
            Ok(false) => stats.failed.push(name),
            Err(e) => {
                log::warn!("{}: {:#}", name, e);
                stats.failed.push(name);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(stats)
}
