//! 通用辅助函数：
//! - 环境变量读取
//! - 带颜色标记的状态行输出
//! - 终端 spinner 与进度条

use std::{env, path::PathBuf, time::Duration};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// 可选读取 PATH 环境变量为 PathBuf。
pub(crate) fn env_opt_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// 可选读取 String 环境变量。
pub(crate) fn env_opt_string(key: &str) -> Option<String> {
    env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

pub(crate) fn print_success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{} {}", style("✖").red(), msg);
}

/// 未找到图标等非致命提示
pub(crate) fn print_miss(msg: &str) {
    println!("{} {}", style("✗").red(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    println!("{} {}", style("!").yellow(), msg);
}

pub(crate) fn print_question(msg: &str) {
    println!("{} {}", style("?").magenta(), msg);
}

pub(crate) fn print_info(msg: &str) {
    println!("{} {}", style("info").cyan(), msg);
}

/// 创建计数进度条；长度可在之后通过 `set_length` 调整
pub(crate) fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(s) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(s.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// 创建带消息的 spinner
pub(crate) fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(s) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(s);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
