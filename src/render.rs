//! 组件渲染模块：
//! - 使用内置 Tera 模板渲染 React / React Native 图标组件
//! - 输出只取决于组件名与 path 列表（不含时间戳等可变内容）

use anyhow::{Context, Result};
use tera::{Context as TContext, Tera};

use crate::config::Platform;

const REACT_COMPONENT_TEMPLATE: &str = include_str!("assets/react_component.tsx");
const REACT_NATIVE_COMPONENT_TEMPLATE: &str = include_str!("assets/react_native_component.tsx");

/// Web 组件：`<path>` + 固定 `currentColor` 填充
pub(crate) fn generate_react_component(component_name: &str, path_data: &[String]) -> Result<String> {
    render_one("react_component.tsx", REACT_COMPONENT_TEMPLATE, component_name, path_data)
}

/// Native 组件：`<Path>`，填充色优先取 `props.color`
pub(crate) fn generate_react_native_component(
    component_name: &str,
    path_data: &[String],
) -> Result<String> {
    render_one(
        "react_native_component.tsx",
        REACT_NATIVE_COMPONENT_TEMPLATE,
        component_name,
        path_data,
    )
}

pub(crate) fn generate_component(
    platform: Platform,
    component_name: &str,
    path_data: &[String],
) -> Result<String> {
    match platform {
        Platform::Web => generate_react_component(component_name, path_data),
        Platform::Native => generate_react_native_component(component_name, path_data),
    }
}

fn render_one(
    template_name: &str,
    template: &str,
    component_name: &str,
    path_data: &[String],
) -> Result<String> {
    let mut tera = Tera::default();
    // path 数据原样输出
    tera.autoescape_on(vec![]);
    tera.add_raw_template(template_name, template)
        .with_context(|| format!("加载组件模板失败: {}", template_name))?;

    let mut ctx = TContext::new();
    ctx.insert("component_name", component_name);
    ctx.insert("paths", path_data);
    tera.render(template_name, &ctx)
        .with_context(|| format!("渲染组件失败: {}", component_name))
}
