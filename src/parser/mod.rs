//! 两种逐字歌词方言与标准翻译轨道的解析器。
//!
//! 单行解析失败只记录诊断并跳过，从不让整个文件的解析失败。

pub mod lrc_parser;
pub mod lrcx_parser;
pub mod yrc_parser;

pub use lrc_parser::parse_translation_lrc;
pub use lrcx_parser::parse_lrcx;
pub use yrc_parser::parse_yrc;

/// 把 `[mm:ss.fff]` 的三段拼成毫秒。
///
/// 小数秒字段右补零到 3 位后按毫秒处理，与原始位数无关；
/// 超过 3 位的只取前 3 位。
pub(crate) fn timestamp_ms(minutes: u64, seconds: u64, fraction: &str) -> u64 {
    (minutes * 60 + seconds) * 1000 + fraction_to_ms(fraction)
}

pub(crate) fn fraction_to_ms(fraction: &str) -> u64 {
    let padded = format!("{fraction:0<3}");
    padded[..3].parse().unwrap_or(0)
}
