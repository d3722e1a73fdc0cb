//! 括号/JSON 混合的 YRC 方言解析器。
//!
//! 每个非空行按固定优先级尝试一串解析策略：
//! 1. 独立的 JSON 对象 `{ "t": …, "d": …, "c": [{ "t", "d", "tx" }, …] }`；
//! 2. 正则形式 `[start,duration]` 加零或多个 `(start,duration,idx)text`
//!    音节元组，元组之外的字面文本保留为不带时间的音节。
//!
//! 单行失败记录诊断并跳过，不影响其余行。

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::model::{Line, Word};

static YRC_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d+)(?:,(\d+))?\](.*)$").expect("编译 YRC_LINE_RE 失败"));
static YRC_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+),(\d+),(\d+)\)").expect("编译 YRC_WORD_RE 失败"));

#[derive(Deserialize)]
struct YrcJsonLine {
    t: u64,
    d: Option<u64>,
    #[serde(default)]
    c: Vec<YrcJsonWord>,
}

#[derive(Deserialize)]
struct YrcJsonWord {
    t: u64,
    d: u64,
    tx: String,
}

/// 行时长未知时的中间表示，时长在全部行解析完后回填。
struct PendingLine {
    start_ms: u64,
    duration_ms: Option<u64>,
    words: Vec<Word>,
}

/// 解析 YRC 文本为时间索引的歌词行序列。
///
/// 缺失行时长时用下一行回填：`next.start - this.start`；
/// 没有下一行则为 0。
#[must_use]
pub fn parse_yrc(content: &str) -> Vec<Line> {
    let mut pending: Vec<PendingLine> = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(line) = parse_json_line(trimmed) {
            pending.push(line);
        } else if let Some(line) = parse_bracket_line(trimmed) {
            pending.push(line);
        } else {
            tracing::warn!("第 {} 行: 无法识别为 YRC 行，已跳过", index + 1);
        }
    }

    backfill_durations(pending)
}

fn parse_json_line(text: &str) -> Option<PendingLine> {
    let parsed: YrcJsonLine = serde_json::from_str(text).ok()?;
    let words = parsed
        .c
        .into_iter()
        .map(|word| Word {
            start_ms: word.t as f64,
            duration_ms: word.d as f64,
            text: word.tx,
        })
        .collect();
    Some(PendingLine {
        start_ms: parsed.t,
        duration_ms: parsed.d,
        words,
    })
}

fn parse_bracket_line(text: &str) -> Option<PendingLine> {
    let caps = YRC_LINE_RE.captures(text)?;
    let start_ms: u64 = caps[1].parse().ok()?;
    let duration_ms: Option<u64> = caps.get(2).and_then(|m| m.as_str().parse().ok());
    let body = caps.get(3).map_or("", |m| m.as_str());

    let mut words = Vec::new();
    let mut cursor = 0;
    let mut tuple: Option<(f64, f64)> = None;
    for m in YRC_WORD_RE.captures_iter(body) {
        let whole = m.get(0).expect("捕获组 0 必然存在");
        push_segment(&mut words, tuple.take(), &body[cursor..whole.start()], start_ms);
        cursor = whole.end();
        tuple = match (m[1].parse(), m[2].parse()) {
            (Ok(start), Ok(duration)) => Some((start, duration)),
            _ => None,
        };
    }
    push_segment(&mut words, tuple, &body[cursor..], start_ms);

    Some(PendingLine {
        start_ms,
        duration_ms,
        words,
    })
}

/// 把一段文本落入音节列表。带元组的段是逐字音节，
/// 元组之外的字面文本保留为不带时间的音节。
fn push_segment(words: &mut Vec<Word>, tuple: Option<(f64, f64)>, text: &str, line_start_ms: u64) {
    if text.is_empty() {
        return;
    }
    let (start_ms, duration_ms) = tuple.unwrap_or((line_start_ms as f64, 0.0));
    words.push(Word {
        start_ms,
        duration_ms,
        text: text.to_string(),
    });
}

fn backfill_durations(pending: Vec<PendingLine>) -> Vec<Line> {
    let next_starts: Vec<Option<u64>> = (0..pending.len())
        .map(|i| pending.get(i + 1).map(|next| next.start_ms))
        .collect();

    pending
        .into_iter()
        .zip(next_starts)
        .map(|(line, next_start)| {
            let duration_ms = line.duration_ms.unwrap_or_else(|| {
                next_start.map_or(0, |next| next.saturating_sub(line.start_ms))
            });
            Line {
                start_ms: line.start_ms as f64,
                duration_ms: duration_ms as f64,
                words: line.words,
            }
        })
        .collect()
}
