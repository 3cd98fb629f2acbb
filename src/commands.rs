//! 命令调度模块：
//! - 接收解析好的 CLI 参数，结合环境变量计算“有效参数”
//! - 调用配置加载、初始化、生成、浏览等模块

use std::{env, path::PathBuf};

use anyhow::{bail, Context, Result};

use crate::{
    browse::browse,
    cli::{Cli, Command, TargetArgs},
    config::{read_config, JsonConfig, Platform, ProjectPaths, CONFIG_FILE_NAME, LIB_NAME},
    generate::{add_icons, generate_all, GenerateContext, GenerationStats},
    init::initialize_config,
    prompt::{Prompter, TerminalPrompter},
    store::{BundledStore, DirStore, IconStore},
    utils::{
        create_progress_bar, env_opt_path, env_opt_string, print_error, print_info, print_success,
        print_warning,
    },
};

/// 运行指定的子命令
pub(crate) fn run(cli: Cli) -> Result<()> {
    // 项目根目录：CLI > 环境变量 > 当前目录
    let root = match cli.cwd.or_else(|| env_opt_path("PIX31_CWD")) {
        Some(dir) => dir,
        None => env::current_dir().context("无法获取当前目录")?,
    };
    let paths = ProjectPaths::new(root);
    log::debug!("project root: {}", paths.root().display());

    let mut prompter = TerminalPrompter::new();

    match cli.command {
        Command::Init { skip_install } => {
            if initialize_config(&paths, &mut prompter, skip_install)?.is_none() {
                bail!("Operation cancelled");
            }
            Ok(())
        }
        Command::Add { icons, target } => {
            if icons.is_empty() {
                print_warning(&format!(
                    "Type out which icons you want to install. Run \"{} list\" to browse available icon names.",
                    LIB_NAME
                ));
                return Ok(());
            }
            let Some(config) = load_or_init_config(&paths, &mut prompter, &target)? else {
                print_warning("Operation cancelled");
                return Ok(());
            };
            let store = open_store(&paths, target.icons_dir.clone());
            let ctx = GenerateContext {
                paths: &paths,
                config: &config,
                store: store.as_ref(),
            };
            let stats = add_icons(&ctx, &mut prompter, &icons)?;
            log_summary(&stats);
            Ok(())
        }
        Command::List { filter, icons_dir } => {
            let store = open_store(&paths, icons_dir);
            let names = store.names()?;
            let needle = filter.map(|f| f.to_lowercase());
            let mut shown = 0usize;
            for name in names
                .iter()
                .filter(|n| needle.as_ref().map_or(true, |f| n.to_lowercase().contains(f)))
            {
                println!("{}", name);
                shown += 1;
            }
            print_info(&format!("{} icons ({})", shown, store.describe()));
            Ok(())
        }
        Command::Browse { category } => {
            let base = env_opt_string("PIX31_BROWSE_URL");
            browse(base.as_deref(), category.as_deref())
        }
        Command::GenerateAll { out, force, target } => {
            let Some(mut config) = load_or_init_config(&paths, &mut prompter, &target)? else {
                print_warning("Operation cancelled");
                return Ok(());
            };
            if let Some(out) = out {
                config.output_path = out;
            }
            let store = open_store(&paths, target.icons_dir.clone());
            let ctx = GenerateContext {
                paths: &paths,
                config: &config,
                store: store.as_ref(),
            };
            let progress = create_progress_bar(0, "Generating icons...");
            let stats = generate_all(&ctx, force, &progress)?;
            print_success(&format!(
                "Generated {} of {} icons into {}",
                stats.successful_files(),
                stats.total_files,
                config.output_path
            ));
            if !stats.skipped.is_empty() {
                print_warning(&format!(
                    "{} existing files kept (use --force to overwrite)",
                    stats.skipped.len()
                ));
            }
            for name in &stats.failed {
                print_error(&format!("Failed: {}", name));
            }
            Ok(())
        }
    }
}

/// 读取配置；不存在时进入 init 流程。命令行平台参数只影响本次运行
fn load_or_init_config(
    paths: &ProjectPaths,
    prompter: &mut dyn Prompter,
    target: &TargetArgs,
) -> Result<Option<JsonConfig>> {
    let config = match read_config(paths)? {
        Some(c) => c,
        None => {
            print_error(&format!(
                "{} config file not found. Creating config file.",
                CONFIG_FILE_NAME
            ));
            match initialize_config(paths, prompter, false)? {
                Some(c) => c,
                None => return Ok(None),
            }
        }
    };
    Ok(Some(apply_platform_override(config, target)))
}

fn apply_platform_override(mut config: JsonConfig, target: &TargetArgs) -> JsonConfig {
    if target.native {
        config.platform = Platform::Native;
    } else if target.web {
        config.platform = Platform::Web;
    }
    config
}

/// 图标来源：CLI --icons-dir > PIX31_ICONS_DIR > 内置图标集
fn open_store(paths: &ProjectPaths, icons_dir: Option<PathBuf>) -> Box<dyn IconStore> {
    match icons_dir.or_else(|| env_opt_path("PIX31_ICONS_DIR")) {
        Some(dir) => Box::new(DirStore::new(paths.root().join(dir))),
        None => Box::new(BundledStore),
    }
}

fn log_summary(stats: &GenerationStats) {
    log::info!(
        "requested {}, generated {}, skipped {}, failed {}",
        stats.total_files,
        stats.successful_files(),
        stats.skipped.len(),
        stats.failed.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(native: bool, web: bool) -> TargetArgs {
        TargetArgs {
            native,
            web,
            icons_dir: None,
        }
    }

    #[test]
    fn platform_flags_override_config_for_the_run() {
        let config = JsonConfig {
            platform: Platform::Web,
            output_path: "icons".to_string(),
        };
        assert_eq!(
            apply_platform_override(config.clone(), &target(true, false)).platform,
            Platform::Native
        );
        assert_eq!(
            apply_platform_override(config.clone(), &target(false, false)).platform,
            Platform::Web
        );

        let native = JsonConfig {
            platform: Platform::Native,
            ..config
        };
        assert_eq!(
            apply_platform_override(native, &target(false, true)).platform,
            Platform::Web
        );
    }

    #[test]
    fn icons_dir_is_resolved_against_project_root() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("svg")).unwrap();
        std::fs::write(dir.path().join("svg/heart.svg"), "<svg/>").unwrap();
        let paths = ProjectPaths::new(dir.path());
        let store = open_store(&paths, Some(PathBuf::from("svg")));
        assert_eq!(store.names().unwrap(), vec!["heart"]);
    }
}
