//! 标准 `[mm:ss.xx]text` 翻译轨道解析器。
//!
//! 产出时间戳到翻译文本的映射，供最近邻对齐使用。

use std::sync::LazyLock;

use regex::Regex;

use crate::model::TranslationMap;

static LRC_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d+):(\d+)\.(\d+)\](.*)$").expect("编译 LRC_LINE_RE 失败"));

/// 解析独立的标准 LRC 翻译轨道。
///
/// 小数秒字段右补零到 3 位后按毫秒处理；不匹配的行直接忽略。
/// 不假设输入已按时间排序，`BTreeMap` 自然完成排序。
#[must_use]
pub fn parse_translation_lrc(content: &str) -> TranslationMap {
    let mut map = TranslationMap::new();

    for raw_line in content.lines() {
        let trimmed = raw_line.trim();
        let Some(caps) = LRC_LINE_RE.captures(trimmed) else {
            continue;
        };
        let (Ok(minutes), Ok(seconds)) = (caps[1].parse::<u64>(), caps[2].parse::<u64>()) else {
            continue;
        };
        let timestamp = super::timestamp_ms(minutes, seconds, &caps[3]);
        let text = caps.get(4).map_or("", |m| m.as_str()).trim().to_string();
        if !text.is_empty() {
            map.insert(timestamp, text);
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_track() {
        let map = parse_translation_lrc("[00:01.00]你好\n[00:05.50]再见\n无关行");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1000).map(String::as_str), Some("你好"));
        assert_eq!(map.get(&5500).map(String::as_str), Some("再见"));
    }

    #[test]
    fn test_centisecond_field_padded() {
        let map = parse_translation_lrc("[00:01.5]甲");
        assert!(map.contains_key(&1500), "两位以下的小数秒应右补零");
    }

    #[test]
    fn test_unsorted_input_is_sorted_by_map() {
        let map = parse_translation_lrc("[00:10.00]后\n[00:01.00]前");
        let keys: Vec<u64> = map.keys().copied().collect();
        assert_eq!(keys, vec![1000, 10_000]);
    }
}
