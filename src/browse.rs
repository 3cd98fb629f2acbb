//! 在默认浏览器中打开图标网站

use anyhow::{Context, Result};
use url::Url;

use crate::utils::{print_error, print_success};

pub(crate) const PIXELARTICONS_URL: &str = "https://pixelarticons.com/";

/// 计算要打开的地址：可覆盖基础 URL，可选附加分类参数
pub(crate) fn browse_url(base: Option<&str>, category: Option<&str>) -> Result<Url> {
    let base = base.unwrap_or(PIXELARTICONS_URL);
    let mut url = Url::parse(base).with_context(|| format!("无效的网站地址: {}", base))?;
    if let Some(cat) = category.map(str::trim).filter(|c| !c.is_empty()) {
        url.query_pairs_mut().append_pair("category", cat);
    }
    Ok(url)
}

/// 打开浏览器；打开失败只提示，不视为命令失败
pub(crate) fn browse(base: Option<&str>, category: Option<&str>) -> Result<()> {
    let url = browse_url(base, category)?;
    match webbrowser::open(url.as_str()) {
        Ok(()) => print_success(&format!("Opened {}", url)),
        Err(e) => print_error(&format!("Error opening browser for {}: {}", url, e)),
    }
    Ok(())
}
