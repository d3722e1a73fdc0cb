//! 扩展卡拉OK（"lrcx"）方言解析器。
//!
//! 该方言用 `[kuwo:N]` 标签携带供应商缩放常数（**八进制**，这是
//! 关键行为，不是十进制），随后的每个 `<v1,v2>` 音节元组按
//! `k1 = N/10`、`k2 = N%10` 换算成真实毫秒：
//!
//! ```text
//! word.start    = line_start + (v1 + v2) / (2 * k1)
//! word.duration = (v1 - v2) / (2 * k2)
//! ```
//!
//! 换算是实数除法，小数毫秒原样保留。

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Line, Word};

static KUWO_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[kuwo:(\d+)\]").expect("编译 KUWO_TAG_RE 失败"));
static LRCX_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d+):(\d+)\.(\d+)\](.*)$").expect("编译 LRCX_LINE_RE 失败"));
// v2 在畸形输入下可能为负
static LRCX_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(\d+),(-?\d+)>([^<]*)").expect("编译 LRCX_WORD_RE 失败"));

/// 解析 lrcx 文本为时间索引的歌词行序列。
///
/// 缩放常数跨行生效，直到被下一个 `[kuwo:N]` 重新定义；
/// 无音节的行保留（时长为 0），由下游显示逻辑决定取舍。
#[must_use]
pub fn parse_lrcx(content: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut k1 = 0.0_f64;
    let mut k2 = 0.0_f64;

    for (index, raw_line) in content.lines().enumerate() {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = KUWO_TAG_RE.captures(trimmed) {
            match u64::from_str_radix(&caps[1], 8) {
                Ok(value) => {
                    k1 = (value / 10) as f64;
                    k2 = (value % 10) as f64;
                }
                Err(e) => {
                    tracing::warn!("第 {} 行: kuwo 标签不是有效的八进制数: {e}", index + 1);
                }
            }
            continue;
        }

        let Some(caps) = LRCX_LINE_RE.captures(trimmed) else {
            continue;
        };
        let (Ok(minutes), Ok(seconds)) = (caps[1].parse::<u64>(), caps[2].parse::<u64>()) else {
            tracing::warn!("第 {} 行: 行时间戳无效，已跳过", index + 1);
            continue;
        };
        let line_start_ms = super::timestamp_ms(minutes, seconds, &caps[3]) as f64;

        let body = caps.get(4).map_or("", |m| m.as_str());
        let mut words = Vec::new();
        for word_caps in LRCX_WORD_RE.captures_iter(body) {
            let (Ok(v1), Ok(v2)) = (word_caps[1].parse::<f64>(), word_caps[2].parse::<f64>())
            else {
                tracing::warn!("第 {} 行: 音节元组数值无效，已跳过该音节", index + 1);
                continue;
            };
            words.push(Word {
                start_ms: line_start_ms + scale(v1 + v2, k1),
                duration_ms: scale(v1 - v2, k2),
                text: word_caps[3].to_string(),
            });
        }

        if words.is_empty() && !body.trim().is_empty() {
            // 没有逐字时间的纯文本行：文本保留为不带时间的音节，
            // 行时长维持 0（交错翻译的判定依赖这一点）
            words.push(Word {
                start_ms: line_start_ms,
                duration_ms: 0.0,
                text: body.trim().to_string(),
            });
        }

        lines.push(Line::from_words(line_start_ms, words));
    }

    lines
}

/// `value / (2 * k)`，k 为 0 时钳制到 0 而不是传播 inf/NaN。
fn scale(value: f64, k: f64) -> f64 {
    if k == 0.0 { 0.0 } else { value / (2.0 * k) }
}
