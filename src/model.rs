//! 引擎的核心数据模型。
//!
//! 解码的每次请求产生一份不可变的 [`Line`] 序列，在该曲目的播放期间
//! 只读使用，曲目切换时整体替换。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 时间戳（毫秒）到翻译文本的映射。
///
/// 使用 `BTreeMap` 保证迭代顺序稳定：最近邻查找在等距平局时
/// 总是较早的时间戳胜出。
pub type TranslationMap = BTreeMap<u64, String>;

/// 一行歌词中带时间信息的一个音节。
///
/// lrcx 方言的逐字时间由实数除法得出，小数毫秒必须原样保留，
/// 否则长曲目会产生可见的同步漂移，因此时间字段使用 `f64`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// 绝对开始时间（毫秒）。
    pub start_ms: f64,
    /// 原始时长（毫秒）。畸形输入可能产生零或负值，
    /// 原始值予以保留，显示和区间判断使用 [`Self::display_duration_ms`]。
    pub duration_ms: f64,
    /// 音节文本。
    pub text: String,
}

impl Word {
    /// 负时长按 0 处理后的时长。
    #[must_use]
    pub fn display_duration_ms(&self) -> f64 {
        self.duration_ms.max(0.0)
    }

    /// 音节的结束时间（毫秒），负时长按 0 处理。
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.display_duration_ms()
    }
}

/// 一行歌词。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Line {
    /// 行的绝对开始时间（毫秒）。
    pub start_ms: f64,
    /// 行时长（毫秒），非负。
    pub duration_ms: f64,
    /// 行内音节，按源文件顺序排列（不重新排序）。
    pub words: Vec<Word>,
}

impl Line {
    /// 由音节序列构造一行，行时长从最后一个音节推导：
    /// `last.start + last.duration - line.start`，无音节时为 0。
    #[must_use]
    pub fn from_words(start_ms: f64, words: Vec<Word>) -> Self {
        let duration_ms = words
            .last()
            .map_or(0.0, |last| (last.start_ms + last.duration_ms - start_ms).max(0.0));
        Self {
            start_ms,
            duration_ms,
            words,
        }
    }

    /// 行的结束时间（毫秒）。
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }
}

/// 双语显示用的聚类结果：原文行加上最佳匹配的翻译行。
///
/// 聚类窗口内未被选中的行保留在 `extras` 中，不丢弃。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteredLine {
    /// 原文行。
    pub origin: Line,
    /// 聚类内匹配到的翻译行。
    pub translation: Option<Line>,
    /// 聚类内剩余的行。
    pub extras: Vec<Line>,
}

/// 某一播放时刻的同步快照。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SyncState {
    /// 活动行下标。播放时刻不落在任何行区间内时为 `None`。
    pub active_line_index: Option<usize>,
    /// 活动行内的活动音节下标。
    pub active_word_index: Option<usize>,
    /// 下一行下标（有活动行时为活动行的下一行）。
    pub next_line_index: Option<usize>,
    /// 是否处于两行之间的间隙中。
    pub in_gap: bool,
    /// 间隙进度，取值 [0, 1]。
    pub gap_progress: f32,
}
