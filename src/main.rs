//! pix31：从 pixelarticons 图标集生成 React / React Native 图标组件

mod browse;
mod cli;
mod commands;
mod config;
mod generate;
mod index;
mod init;
mod naming;
mod prompt;
mod render;
mod search;
mod store;
mod svg;
mod utils;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    commands::run(cli)
}

/// 默认只输出 warn；`-v` / `-vv` 提升级别，RUST_LOG 优先
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
