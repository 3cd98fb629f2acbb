//! 交互提示模块：
//! - `Prompter` 抽象所有用户交互，便于在测试中替换
//! - `TerminalPrompter` 基于 dialoguer 实现

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::config::Platform;

/// 建议列表末尾的取消项
pub(crate) const CANCEL_VALUE: &str = "cancel";
const CANCEL_LABEL: &str = "CANCEL";

/// 选择项：`value` 为返回值，`label` 为显示文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Choice {
    pub(crate) value: String,
    pub(crate) label: String,
}

/// 建议列表 + 取消项
pub(crate) fn suggestion_choices(suggestions: &[String]) -> Vec<Choice> {
    suggestions
        .iter()
        .map(|name| Choice {
            value: name.clone(),
            label: name.clone(),
        })
        .chain(std::iter::once(Choice {
            value: CANCEL_VALUE.to_string(),
            label: CANCEL_LABEL.to_string(),
        }))
        .collect()
}

pub(crate) trait Prompter {
    /// 从建议中选择一个图标；取消返回 `None`
    fn select_suggestion(&mut self, suggestions: &[String]) -> Result<Option<String>>;
    /// 是否覆盖已存在的组件文件；无回答视为否
    fn confirm_overwrite(&mut self, component_name: &str) -> Result<bool>;
    /// 是否覆盖已存在的配置文件
    fn confirm_config_overwrite(&mut self, file_name: &str) -> Result<bool>;
    fn select_platform(&mut self) -> Result<Option<Platform>>;
    fn input_output_path(&mut self, default: &str) -> Result<Option<String>>;
}

/// 终端交互实现
pub(crate) struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub(crate) fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select_suggestion(&mut self, suggestions: &[String]) -> Result<Option<String>> {
        let choices = suggestion_choices(suggestions);
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt("Select an icon")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        Ok(picked
            .map(|idx| choices[idx].value.clone())
            .filter(|value| value != CANCEL_VALUE))
    }

    fn confirm_overwrite(&mut self, component_name: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(format!("Would you like to override /{}.tsx", component_name))
            .default(false)
            .interact_opt()?;
        Ok(answer.unwrap_or(false))
    }

    fn confirm_config_overwrite(&mut self, file_name: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(format!(
                "{} already exists. Would you like to overwrite it?",
                file_name
            ))
            .default(false)
            .interact_opt()?;
        Ok(answer.unwrap_or(false))
    }

    fn select_platform(&mut self) -> Result<Option<Platform>> {
        let platforms = [Platform::Web, Platform::Native];
        let labels: Vec<&str> = platforms.iter().map(|p| p.label()).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt("Select your platform")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        Ok(picked.map(|idx| platforms[idx]))
    }

    fn input_output_path(&mut self, default: &str) -> Result<Option<String>> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt("What directory should the icons be added to?")
            .default(default.to_string())
            .validate_with(|v: &String| -> Result<(), &str> {
                if v.trim().is_empty() {
                    Err("Please enter a valid path")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        let value = value.trim().to_string();
        Ok(if value.is_empty() { None } else { Some(value) })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! 测试用的脚本化 Prompter

    use std::collections::VecDeque;

    use super::*;

    #[derive(Debug, Default)]
    pub(crate) struct ScriptedPrompter {
        pub(crate) selections: VecDeque<Option<String>>,
        pub(crate) overwrites: VecDeque<bool>,
        pub(crate) config_overwrite: bool,
        pub(crate) platform: Option<Platform>,
        pub(crate) output_path: Option<String>,
        /// 记录每次建议列表，便于断言
        pub(crate) seen_suggestions: Vec<Vec<String>>,
        pub(crate) overwrite_prompts: Vec<String>,
        pub(crate) platform_prompts: usize,
    }

    impl Prompter for ScriptedPrompter {
        fn select_suggestion(&mut self, suggestions: &[String]) -> Result<Option<String>> {
            self.seen_suggestions.push(suggestions.to_vec());
            Ok(self.selections.pop_front().flatten())
        }

        fn confirm_overwrite(&mut self, component_name: &str) -> Result<bool> {
            self.overwrite_prompts.push(component_name.to_string());
            Ok(self.overwrites.pop_front().unwrap_or(false))
        }

        fn confirm_config_overwrite(&mut self, _file_name: &str) -> Result<bool> {
            Ok(self.config_overwrite)
        }

        fn select_platform(&mut self) -> Result<Option<Platform>> {
            self.platform_prompts += 1;
            Ok(self.platform)
        }

        fn input_output_path(&mut self, _default: &str) -> Result<Option<String>> {
            Ok(self.output_path.clone())
        }
    }
}
