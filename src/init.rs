//! 初始化模块：
//! - `pix31 init` 检测框架、询问平台与输出目录
//! - 安装缺失的 npm 依赖并写出 `pix31.json`

use std::{
    fs,
    process::{Command, Stdio},
};

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::{
    config::{
        write_config, JsonConfig, Platform, ProjectPaths, CONFIG_FILE_NAME, DEFAULT_OUTPUT_PATH,
        LIB_NAME,
    },
    prompt::Prompter,
    utils::{create_spinner, print_info},
};

const WEB_FRAMEWORKS: [&str; 6] = ["react", "react-dom", "next", "gatsby", "vite", "webpack"];
const ICON_PACKAGE: &str = "pixelarticons";

/// 交互式创建配置；用户取消时返回 `None`
pub(crate) fn initialize_config(
    paths: &ProjectPaths,
    prompter: &mut dyn Prompter,
    skip_install: bool,
) -> Result<Option<JsonConfig>> {
    if paths.config_path().exists() && !prompter.confirm_config_overwrite(CONFIG_FILE_NAME)? {
        return Ok(None);
    }

    let package = read_package_json(paths);
    let platform = match package.as_ref().and_then(detect_framework) {
        Some(p) => {
            log::info!("detected {} project", p);
            p
        }
        None => match prompter.select_platform()? {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    let Some(output_path) = prompter.input_output_path(DEFAULT_OUTPUT_PATH)? else {
        return Ok(None);
    };

    if !skip_install {
        let (deps, dev_deps) = missing_dependencies(platform, package.as_ref());
        install_dependencies(paths, &deps, false)?;
        install_dependencies(paths, &dev_deps, true)?;
    }

    let config = JsonConfig {
        platform,
        output_path,
    };
    write_config(paths, &config)?;
    print_init_success(&config);
    Ok(Some(config))
}

fn read_package_json(paths: &ProjectPaths) -> Option<Value> {
    let text = fs::read_to_string(paths.package_json()).ok()?;
    match serde_json::from_str(&text) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring malformed package.json: {}", e);
            None
        }
    }
}

/// 依赖或开发依赖中是否声明了某个包
pub(crate) fn package_declared(package: &Value, name: &str) -> bool {
    ["dependencies", "devDependencies"]
        .iter()
        .any(|section| package.get(section).and_then(|deps| deps.get(name)).is_some())
}

/// 根据 package.json 推断平台：react-native 优先于常见 Web 框架
pub(crate) fn detect_framework(package: &Value) -> Option<Platform> {
    if package_declared(package, "react-native") {
        return Some(Platform::Native);
    }
    if WEB_FRAMEWORKS.iter().any(|dep| package_declared(package, dep)) {
        return Some(Platform::Web);
    }
    None
}

/// 返回 (依赖, 开发依赖) 中尚未安装的包
pub(crate) fn missing_dependencies(
    platform: Platform,
    package: Option<&Value>,
) -> (Vec<&'static str>, Vec<&'static str>) {
    let missing = |name: &&str| !package.map(|p| package_declared(p, name)).unwrap_or(false);
    let (deps, dev_deps): (&[&str], &[&str]) = match platform {
        Platform::Native => (&["react-native-svg", ICON_PACKAGE], &[]),
        Platform::Web => (
            &["tailwind-merge", "tailwindcss-animate", ICON_PACKAGE],
            &["tailwindcss"],
        ),
    };
    (
        deps.iter().copied().filter(missing).collect(),
        dev_deps.iter().copied().filter(missing).collect(),
    )
}

fn npm_program() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

fn install_dependencies(paths: &ProjectPaths, packages: &[&str], dev: bool) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }
    let kind = if dev { "dev dependencies" } else { "dependencies" };
    let spinner = create_spinner(&format!("Installing {}: {}...", kind, packages.join(", ")));

    let mut cmd = Command::new(npm_program());
    cmd.arg("install");
    if dev {
        cmd.arg("-D");
    }
    let output = cmd
        .args(packages)
        .current_dir(paths.root())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    match output {
        Ok(out) if out.status.success() => {
            spinner.finish_with_message(format!("Installed {}", kind));
            Ok(())
        }
        Ok(out) => {
            spinner.finish_with_message(format!("Failed to install {}", kind));
            bail!(
                "npm install 失败 ({}): {}",
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            )
        }
        Err(e) => {
            spinner.finish_with_message(format!("Failed to install {}", kind));
            Err(e).with_context(|| format!("无法运行 {}", npm_program()))
        }
    }
}

fn print_init_success(config: &JsonConfig) {
    println!();
    print_info(&format!(
        "Thanks for choosing {} to manage your pixelarticons",
        LIB_NAME
    ));
    print_info("You should be set up to start using pix31 now!");
    print_info("We have added a couple of things to help you out:");
    print_info(&format!("- {} contains your icon configuration", CONFIG_FILE_NAME));
    print_info(&format!("- {} will contain your icon components", config.output_path));
    println!();
    println!("Commands you can run:");
    println!("  {} browse                     Open pixelarticons website in browser", LIB_NAME);
    println!("  {} add [icon-1] [icon-2] ...  Add icons to your project", LIB_NAME);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::read_config, prompt::testing::ScriptedPrompter};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn detects_native_before_web() {
        let pkg = json!({ "dependencies": { "react": "18", "react-native": "0.74" } });
        assert_eq!(detect_framework(&pkg), Some(Platform::Native));

        let pkg = json!({ "devDependencies": { "vite": "5" } });
        assert_eq!(detect_framework(&pkg), Some(Platform::Web));

        let pkg = json!({ "dependencies": { "lodash": "4" } });
        assert_eq!(detect_framework(&pkg), None);
    }

    #[test]
    fn lists_only_missing_packages() {
        let pkg = json!({
            "dependencies": { "tailwind-merge": "2", "pixelarticons": "1" },
            "devDependencies": { "tailwindcss": "3" }
        });
        let (deps, dev) = missing_dependencies(Platform::Web, Some(&pkg));
        assert_eq!(deps, vec!["tailwindcss-animate"]);
        assert!(dev.is_empty());

        let (deps, dev) = missing_dependencies(Platform::Native, None);
        assert_eq!(deps, vec!["react-native-svg", "pixelarticons"]);
        assert!(dev.is_empty());
    }

    #[test]
    fn writes_config_from_detected_platform() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "dependencies": { "next": "14" } }"#,
        )
        .unwrap();
        let paths = ProjectPaths::new(dir.path());
        let mut prompter = ScriptedPrompter {
            output_path: Some("src/icons".to_string()),
            ..Default::default()
        };

        let config = initialize_config(&paths, &mut prompter, true).unwrap().unwrap();
        assert_eq!(config.platform, Platform::Web);
        assert_eq!(prompter.platform_prompts, 0);
        assert_eq!(read_config(&paths).unwrap(), Some(config));
    }

    #[test]
    fn prompts_for_platform_when_undetected() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path());
        let mut prompter = ScriptedPrompter {
            platform: Some(Platform::Native),
            output_path: Some("icons".to_string()),
            ..Default::default()
        };

        let config = initialize_config(&paths, &mut prompter, true).unwrap().unwrap();
        assert_eq!(prompter.platform_prompts, 1);
        assert_eq!(config.platform, Platform::Native);
        assert_eq!(config.output_path, "icons");
    }

    #[test]
    fn declined_overwrite_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "platform": "web", "outputPath": "old" }"#,
        )
        .unwrap();
        let paths = ProjectPaths::new(dir.path());
        let mut prompter = ScriptedPrompter {
            platform: Some(Platform::Native),
            output_path: Some("new".to_string()),
            ..Default::default()
        };

        assert!(initialize_config(&paths, &mut prompter, true).unwrap().is_none());
        assert_eq!(read_config(&paths).unwrap().unwrap().output_path, "old");
    }

    #[test]
    fn cancelled_platform_prompt_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path());
        let mut prompter = ScriptedPrompter::default();
        assert!(initialize_config(&paths, &mut prompter, true).unwrap().is_none());
        assert!(!paths.config_path().exists());
    }
}
