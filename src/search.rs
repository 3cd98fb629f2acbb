//! 图标名模糊匹配：
//! - `calculate_similarity`：短路式打分（包含 > 公共单词 > 逐位字符）
//! - `search_related_file_names`：过滤、排序、截断得到建议列表

/// 默认返回的建议数量
pub(crate) const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// 低于或等于该分数的候选不会出现在建议中
const MIN_SCORE: f64 = 0.3;

const CONTAINS_SCORE: f64 = 0.8;

/// 计算两个名称的相似度，取值 [0, 1]。规则按顺序命中即返回。
pub(crate) fn calculate_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let s1 = a.to_lowercase();
    let s2 = b.to_lowercase();

    if s2.contains(&s1) || s1.contains(&s2) {
        return CONTAINS_SCORE;
    }

    let words1: Vec<&str> = s1.split('-').collect();
    let words2: Vec<&str> = s2.split('-').collect();
    let common = words1.iter().filter(|w| words2.contains(w)).count();
    if common > 0 {
        let max_words = words1.len().max(words2.len()) as f64;
        return 0.5 + (common as f64 / max_words) * 0.3;
    }

    let c1: Vec<char> = s1.chars().collect();
    let c2: Vec<char> = s2.chars().collect();
    let matches = c1.iter().zip(c2.iter()).filter(|(x, y)| x == y).count();
    matches as f64 / c1.len().max(c2.len()) as f64
}

/// 返回与 `query` 最相近的最多 `limit` 个候选名（分数降序，同分保持输入顺序）。
pub(crate) fn search_related_file_names<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    limit: usize,
) -> Vec<String> {
    let mut scored: Vec<(&str, f64)> = candidates
        .iter()
        .map(|c| (c.as_ref(), calculate_similarity(query, c.as_ref())))
        .filter(|(_, score)| *score > MIN_SCORE)
        .collect();

    // sort_by 为稳定排序
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    log::debug!("suggestions for {:?}: {:?}", query, scored);

    scored
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_string())
        .collect()
}
