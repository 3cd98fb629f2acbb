//! SVG 解析与 path 提取模块：
//! - 将 SVG 文本解析为 `SvgNode` 树（元素名 + 属性 + 有序子节点）
//! - 先序深度遍历收集所有 `<path>` 的 `d` 属性

use std::collections::BTreeMap;

use quick_xml::{
    events::{attributes::AttrError, BytesStart, Event},
    Reader,
};
use thiserror::Error;

/// SVG 元素节点
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SvgNode {
    pub(crate) name: String,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) children: Vec<SvgNode>,
}

impl SvgNode {
    pub(crate) fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

#[derive(Debug, Error)]
pub(crate) enum SvgError {
    #[error("XML 解析失败: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("属性解析失败: {0}")]
    Attr(#[from] AttrError),
    #[error("缺少根元素")]
    NoRoot,
    #[error("存在多个根元素: <{0}>")]
    MultipleRoots(String),
    #[error("元素 <{0}> 未闭合")]
    Unclosed(String),
    #[error("多余的结束标签 </{0}>")]
    UnmatchedEnd(String),
    #[error("未找到任何 path 数据")]
    NoPaths,
}

impl SvgError {
    /// 标记语法错误（区别于“合法 SVG 但没有 path”）
    pub(crate) fn is_parse_failure(&self) -> bool {
        !matches!(self, SvgError::NoPaths)
    }
}

/// 解析 SVG 文本为元素树
pub(crate) fn parse_svg(text: &str) -> Result<SvgNode, SvgError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<SvgNode> = Vec::new();
    let mut root: Option<SvgNode> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(element_from(&e)?),
            Event::Empty(e) => {
                let node = element_from(&e)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(e) => {
                let node = stack.pop().ok_or_else(|| {
                    SvgError::UnmatchedEnd(String::from_utf8_lossy(e.name().as_ref()).into_owned())
                })?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(SvgError::Unclosed(open.name));
    }
    root.ok_or(SvgError::NoRoot)
}

fn element_from(e: &BytesStart<'_>) -> Result<SvgNode, SvgError> {
    let mut attributes = BTreeMap::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.insert(key, value);
    }
    Ok(SvgNode {
        name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        attributes,
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [SvgNode],
    root: &mut Option<SvgNode>,
    node: SvgNode,
) -> Result<(), SvgError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_some() {
        return Err(SvgError::MultipleRoots(node.name));
    } else {
        *root = Some(node);
    }
    Ok(())
}

/// 先序深度遍历，按文档顺序返回所有 `<path>` 节点
pub(crate) fn find_all_path_elements(node: &SvgNode) -> Vec<&SvgNode> {
    let mut paths = Vec::new();
    collect_paths_recursive(node, &mut paths);
    paths
}

fn collect_paths_recursive<'a>(node: &'a SvgNode, paths: &mut Vec<&'a SvgNode>) {
    if node.name == "path" {
        paths.push(node);
    }
    for child in &node.children {
        collect_paths_recursive(child, paths);
    }
}

/// 提取所有 path 的 `d` 属性；解析失败与“没有 path”分别返回不同错误
pub(crate) fn extract_svg_paths(svg_content: &str) -> Result<Vec<String>, SvgError> {
    let tree = parse_svg(svg_content)?;
    let data: Vec<String> = find_all_path_elements(&tree)
        .into_iter()
        .filter_map(|node| node.attr("d").map(str::to_string))
        .collect();
    if data.is_empty() {
        return Err(SvgError::NoPaths);
    }
    Ok(data)
}

/// 兼容接口：任何失败都记录日志并返回 `None`
pub(crate) fn extract_svg_path(svg_content: &str) -> Option<Vec<String>> {
    match extract_svg_paths(svg_content) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("Failed to parse SVG: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NESTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <!-- outline -->
  <path d="M1 1h2v2H1z"/>
  <g fill="none">
    <path d="M5 5h2v2H5z"></path>
    <g><path d="M9 9h2v2H9z"/></g>
    <rect x="1" y="1" width="2" height="2"/>
  </g>
  <path d="M13 13h2v2h-2z"/>
</svg>"#;

    #[test]
    fn parses_tree_structure() {
        let tree = parse_svg(NESTED).unwrap();
        assert_eq!(tree.name, "svg");
        assert_eq!(tree.attr("viewBox"), Some("0 0 24 24"));
        assert_eq!(tree.children.len(), 3);
        assert_eq!(tree.children[1].name, "g");
        assert_eq!(tree.children[1].children.len(), 3);
    }

    #[test]
    fn extracts_paths_in_document_order() {
        let paths = extract_svg_paths(NESTED).unwrap();
        assert_eq!(
            paths,
            vec!["M1 1h2v2H1z", "M5 5h2v2H5z", "M9 9h2v2H9z", "M13 13h2v2h-2z"]
        );
    }

    #[test]
    fn skips_paths_without_data() {
        let svg = r#"<svg><path id="empty"/><path d="M0 0h1"/></svg>"#;
        assert_eq!(extract_svg_path(svg), Some(vec!["M0 0h1".to_string()]));
    }

    #[test]
    fn no_path_elements_is_failure_not_empty() {
        let svg = r#"<svg viewBox="0 0 24 24"><rect width="2" height="2"/><circle r="1"/></svg>"#;
        let err = extract_svg_paths(svg).unwrap_err();
        assert!(matches!(err, SvgError::NoPaths));
        assert!(!err.is_parse_failure());
        assert_eq!(extract_svg_path(svg), None);
    }

    #[test]
    fn malformed_markup_is_parse_failure() {
        for bad in [
            "invalid svg content",
            "<svg><path d=\"M0 0\"></svg>",
            "<svg><g>",
            "<svg></svg><svg></svg>",
            "<svg><path d=\"M0 0/></svg>",
        ] {
            let err = extract_svg_paths(bad).unwrap_err();
            assert!(err.is_parse_failure(), "{bad:?} -> {err:?}");
            assert_eq!(extract_svg_path(bad), None);
        }
    }

    #[test]
    fn unescapes_attribute_values() {
        let svg = r#"<svg><path d="M0 0&#x20;h1"/></svg>"#;
        assert_eq!(extract_svg_paths(svg).unwrap(), vec!["M0 0 h1"]);
    }
}
