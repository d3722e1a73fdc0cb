//! 翻译轨道对齐。
//!
//! 两种策略，由调用方按来源选择：
//! - 独立轨道：标准 LRC 翻译文件解析成 [`TranslationMap`] 后做
//!   容差窗口内的最近邻匹配；
//! - 交错编码：主歌词序列中紧跟在非零时长行之后的零时长行
//!   被视为前一行的翻译。

use crate::model::{Line, TranslationMap};
use crate::utils::join_words;

/// 最近邻匹配的默认容差窗口（毫秒）。
pub const DEFAULT_TOLERANCE_MS: u64 = 1500;

/// 行在交错编码中的角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// 原文行。
    Origin,
    /// 前一行的翻译。
    Translation,
    /// 无法归类，按原文行处理。
    Unclassified,
}

/// 在容差窗口内查找与查询时间最接近的翻译。
///
/// 平局裁决：绝对距离严格更小者胜出；等距时较早的时间戳胜出
/// （`BTreeMap` 升序迭代天然保证，该行为是确定性的约定而非推断）。
#[must_use]
pub fn nearest_translation(
    map: &TranslationMap,
    timestamp_ms: u64,
    tolerance_ms: u64,
) -> Option<&str> {
    let mut best: Option<(u64, &str)> = None;
    for (&ts, text) in map {
        if ts > timestamp_ms.saturating_add(tolerance_ms) {
            break;
        }
        let distance = ts.abs_diff(timestamp_ms);
        if distance > tolerance_ms {
            continue;
        }
        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, text.as_str()));
        }
    }
    best.map(|(_, text)| text)
}

/// 从解析出的行序列中识别交错编码的翻译。
///
/// 判定规则：某行的推导时长为 0 且其紧邻的前一行不为 0 时，
/// 该行是前一行的翻译，键为前一行的开始时间。未被匹配的行
/// 原样保留为原文，退化而非报错。
#[must_use]
pub fn extract_interleaved(lines: &[Line]) -> (Vec<Line>, TranslationMap) {
    let mut originals: Vec<Line> = Vec::new();
    let mut translations = TranslationMap::new();

    for (index, line) in lines.iter().enumerate() {
        if classify_interleaved(lines, index) == LineRole::Translation {
            let anchor = &lines[index - 1];
            translations.insert(anchor.start_ms as u64, join_words(&line.words));
        } else {
            originals.push(line.clone());
        }
    }

    (originals, translations)
}

/// 对交错序列中的一行做显式角色判定。
#[must_use]
pub fn classify_interleaved(lines: &[Line], index: usize) -> LineRole {
    let Some(line) = lines.get(index) else {
        return LineRole::Unclassified;
    };
    if line.duration_ms != 0.0 {
        return LineRole::Origin;
    }
    match index.checked_sub(1).and_then(|i| lines.get(i)) {
        Some(prev) if prev.duration_ms != 0.0 => LineRole::Translation,
        _ => LineRole::Unclassified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Word;

    fn plain_line(start_ms: f64, duration_ms: f64, text: &str) -> Line {
        Line {
            start_ms,
            duration_ms,
            words: vec![Word {
                start_ms,
                duration_ms,
                text: text.to_string(),
            }],
        }
    }

    #[test]
    fn test_nearest_within_tolerance() {
        let map = TranslationMap::from([(1000, "A".to_string()), (5000, "B".to_string())]);
        assert_eq!(nearest_translation(&map, 1400, 1500), Some("A"));
    }

    #[test]
    fn test_out_of_tolerance_returns_none() {
        let map = TranslationMap::from([(1000, "A".to_string()), (5000, "B".to_string())]);
        assert_eq!(nearest_translation(&map, 7000, 1500), None);
    }

    #[test]
    fn test_exact_tie_prefers_earlier_timestamp() {
        let map = TranslationMap::from([(1000, "早".to_string()), (2000, "晚".to_string())]);
        assert_eq!(nearest_translation(&map, 1500, 1500), Some("早"));
    }

    #[test]
    fn test_empty_map_returns_none() {
        assert_eq!(nearest_translation(&TranslationMap::new(), 0, 1500), None);
    }

    #[test]
    fn test_interleaved_extraction() {
        let lines = vec![
            plain_line(1000.0, 800.0, "over the rainbow"),
            plain_line(1000.0, 0.0, "彩虹之上"),
            plain_line(3000.0, 500.0, "way up high"),
        ];
        let (originals, translations) = extract_interleaved(&lines);
        assert_eq!(originals.len(), 2);
        assert_eq!(translations.get(&1000).map(String::as_str), Some("彩虹之上"));
    }

    #[test]
    fn test_consecutive_zero_duration_lines_degrade_to_originals() {
        let lines = vec![
            plain_line(1000.0, 800.0, "origin"),
            plain_line(1000.0, 0.0, "翻译"),
            plain_line(1100.0, 0.0, "孤行"),
        ];
        let (originals, translations) = extract_interleaved(&lines);
        // 第二个零时长行的前一行也是零时长，不视为翻译
        assert_eq!(translations.len(), 1);
        assert_eq!(originals.len(), 2);
        assert_eq!(join_words(&originals[1].words), "孤行");
    }

    #[test]
    fn test_all_plain_lines_yield_empty_map() {
        let lines = vec![plain_line(0.0, 100.0, "a"), plain_line(200.0, 100.0, "b")];
        let (originals, translations) = extract_interleaved(&lines);
        assert_eq!(originals.len(), 2);
        assert!(translations.is_empty());
    }
}
