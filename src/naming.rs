//! 图标命名模块：
//! - SVG 文件名 -> PascalCase 组件名（处理数字开头的文件名）
//! - 生成 barrel 文件（index.ts）中的 export 行

use std::path::Path;

use crate::config::Platform;

// 数字开头的图标名（如 `4k-box`）需要转成合法的标识符
const NUMBER_WORDS: [&str; 10] = [
    "Zero-", "One-", "Two-", "Three-", "Four-", "Five-", "Six-", "Seven-", "Eight-", "Nine-",
];

/// 若名称以数字开头，将该数字替换为英文单词加连字符（`4g` -> `Four-g`）。
pub(crate) fn convert_number_to_word(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => {
            let word = NUMBER_WORDS[(c as u8 - b'0') as usize];
            format!("{}{}", word, chars.as_str())
        }
        _ => name.to_string(),
    }
}

/// 按 `-` / `_` 切分，每段首字母大写、其余小写后直接拼接。
/// 空字符串或 `None` 返回空字符串。
pub(crate) fn to_pascal_case<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(s) = input.into() else {
        return String::new();
    };
    s.split(['-', '_'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    let mut seg: String = first.to_uppercase().collect();
                    seg.push_str(&chars.as_str().to_lowercase());
                    seg
                }
                None => String::new(),
            }
        })
        .collect()
}

/// 规范化入口：去掉 `.svg` 后缀 -> 数字转单词 -> PascalCase。
pub(crate) fn format_svg_file_name_to_pascal_case(filename: &str) -> String {
    let base = Path::new(filename)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let base = base.strip_suffix(".svg").unwrap_or(base);
    to_pascal_case(convert_number_to_word(base).as_str())
}

/// 生成的组件名，例如 `chevron-down` -> `ChevronDownIcon`
pub(crate) fn component_name(icon_name: &str) -> String {
    format!("{}Icon", format_svg_file_name_to_pascal_case(icon_name))
}

/// Web：具名导出单个组件
pub(crate) fn react_export_line(icon_name: &str) -> String {
    format!("export {{ {} }} from \"./{}\";", component_name(icon_name), icon_name)
}

/// Native：通配导出（保留原始文件名，不做 PascalCase）
pub(crate) fn react_native_export_line(icon_name: &str) -> String {
    format!("export * from \"./{}\";", icon_name)
}

pub(crate) fn export_line(platform: Platform, icon_name: &str) -> String {
    match platform {
        Platform::Native => react_native_export_line(icon_name),
        Platform::Web => react_export_line(icon_name),
    }
}
