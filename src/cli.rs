//! CLI 定义模块：仅负责命令行参数结构体与解析
//! 将 clap 的声明与业务逻辑解耦，便于在其它模块中复用参数。

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 顶层 CLI 入口
#[derive(Parser, Debug)]
#[command(
    name = "pix31",
    about = "A CLI to add pixelarticons to your React and React Native projects.",
    version
)]
pub(crate) struct Cli {
    /// 项目根目录（默认当前目录，亦可用 PIX31_CWD）
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) cwd: Option<PathBuf>,
    /// 输出更多日志（-v: info，-vv: debug）
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// 子命令定义
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Create pix31.json config
    Init {
        /// 跳过 npm 依赖安装
        #[arg(long)]
        skip_install: bool,
    },
    /// Add icons to your project
    Add {
        /// 图标名，例如 chevron-down
        #[arg(value_name = "ICON")]
        icons: Vec<String>,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// List available icon names
    List {
        /// 只列出包含该文本的图标（忽略大小写）
        #[arg(value_name = "FILTER")]
        filter: Option<String>,
        /// SVG 图标目录（默认使用内置图标集，亦可用 PIX31_ICONS_DIR）
        #[arg(long, value_name = "DIR")]
        icons_dir: Option<PathBuf>,
    },
    /// Open pixelarticons website in browser
    Browse {
        /// 打开指定分类
        #[arg(long, value_name = "NAME")]
        category: Option<String>,
    },
    /// Generate components for every available icon
    GenerateAll {
        /// 输出目录，覆盖配置中的 outputPath
        #[arg(short, long, value_name = "DIR")]
        out: Option<String>,
        /// 覆盖已存在的组件文件
        #[arg(long)]
        force: bool,
        #[command(flatten)]
        target: TargetArgs,
    },
}

/// 生成类命令共用参数
#[derive(clap::Args, Debug, Clone)]
pub(crate) struct TargetArgs {
    /// 本次按 React Native 生成（不修改配置文件）
    #[arg(long, conflicts_with = "web")]
    pub(crate) native: bool,
    /// 本次按 React 生成（不修改配置文件）
    #[arg(long)]
    pub(crate) web: bool,
    /// SVG 图标目录（默认使用内置图标集，亦可用 PIX31_ICONS_DIR）
    #[arg(long, value_name = "DIR")]
    pub(crate) icons_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_variadic_icons() {
        let cli = Cli::parse_from(["pix31", "add", "heart", "home", "--native", "-vv"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Add { icons, target } => {
                assert_eq!(icons, vec!["heart", "home"]);
                assert!(target.native);
                assert!(!target.web);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn platform_flags_conflict() {
        assert!(Cli::try_parse_from(["pix31", "add", "heart", "--native", "--web"]).is_err());
    }
}
