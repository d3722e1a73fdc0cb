//! 双语行聚类。
//!
//! 把开始时间落在同一短窗口内的行聚成一组，用显式的文字判别
//! （拉丁而无 CJK → 原文；含 CJK → 翻译）挑出原文/翻译对，
//! 供“罗马音 + 翻译”的双语显示配对使用。

use crate::aligner::LineRole;
use crate::model::{ClusteredLine, Line};
use crate::utils::{is_cjk, join_words};

/// 聚类窗口（毫秒）。
pub const CLUSTER_WINDOW_MS: f64 = 600.0;

/// 按文字判定一行在聚类中的角色。
///
/// 含 CJK 码点 → 翻译；含拉丁字母且无 CJK → 原文；其余不归类。
#[must_use]
pub fn classify_script(line: &Line) -> LineRole {
    let text = join_words(&line.words);
    if text.chars().any(is_cjk) {
        return LineRole::Translation;
    }
    if text.chars().any(|c| c.is_ascii_alphabetic()) {
        return LineRole::Origin;
    }
    LineRole::Unclassified
}

/// 把行序列按 600 毫秒开始时间窗口聚类。
///
/// 每组 ≥ 2 行时优先用 [`classify_script`] 挑出原文和翻译；
/// 判别挑不出干净的组合时退化为前两行分别作原文/翻译。
/// 组内其余行保留在 `extras` 中，从不丢弃。
#[must_use]
pub fn cluster_lines(lines: &[Line]) -> Vec<ClusteredLine> {
    let mut clusters = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let anchor_start = lines[index].start_ms;
        let mut end = index + 1;
        while end < lines.len() && lines[end].start_ms - anchor_start <= CLUSTER_WINDOW_MS {
            end += 1;
        }
        clusters.push(build_cluster(&lines[index..end]));
        index = end;
    }

    clusters
}

/// 重建一行的显示文本（聚类与上游渲染共用的拼接规则）。
#[must_use]
pub fn display_text(line: &Line) -> String {
    join_words(&line.words)
}

fn build_cluster(group: &[Line]) -> ClusteredLine {
    if group.len() < 2 {
        return ClusteredLine {
            origin: group[0].clone(),
            translation: None,
            extras: Vec::new(),
        };
    }

    let roles: Vec<LineRole> = group.iter().map(classify_script).collect();
    let origin_index = roles.iter().position(|&role| role == LineRole::Origin);
    let translation_index = roles.iter().position(|&role| role == LineRole::Translation);

    let (origin_index, translation_index) = match (origin_index, translation_index) {
        (Some(o), Some(t)) => (o, t),
        // 判别不出干净的原文/翻译组合，退化为前两行
        _ => (0, 1),
    };

    let extras = group
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != origin_index && i != translation_index)
        .map(|(_, line)| line.clone())
        .collect();

    ClusteredLine {
        origin: group[origin_index].clone(),
        translation: Some(group[translation_index].clone()),
        extras,
    }
}
