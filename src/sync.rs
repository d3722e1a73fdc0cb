//! 播放时刻到活动行/活动字/间隙状态的解析。
//!
//! 该函数被宿主的播放进度通知高频调用（每帧或每个定时器节拍），
//! 必须是无副作用、不分配、对相同输入逐位一致的纯函数。

use crate::model::{Line, SyncState};

/// 对给定播放时刻解析同步快照。
///
/// 活动行判定使用半开区间 `[start, start + duration)`；行按时间
/// 顺序线性扫描（歌词行通常只有数百条）。没有行包含该时刻时，
/// 若存在下一行则给出间隙进度：
/// `(t - prev_end) / (next_start - prev_end)`，钳制到 `[0, 1]`，
/// 严格落在 (0, 1) 内时 `in_gap` 为真。
///
/// 畸形输入（乱序或负时长的音节）不会引发 panic，只产生尽力
/// 而为的匹配。
#[must_use]
pub fn resolve(lines: &[Line], playback_ms: u32) -> SyncState {
    let mut state = SyncState::default();
    if lines.is_empty() {
        return state;
    }
    let t = f64::from(playback_ms);

    state.active_line_index = lines
        .iter()
        .position(|line| t >= line.start_ms && t < line.start_ms + line.duration_ms);

    match state.active_line_index {
        Some(active) => {
            state.next_line_index = (active + 1 < lines.len()).then_some(active + 1);
            state.active_word_index = resolve_word(&lines[active].words, t);
        }
        None => {
            state.next_line_index = lines.iter().position(|line| line.start_ms > t);
            if let Some(next) = state.next_line_index {
                let prev_end = if next == 0 { 0.0 } else { lines[next - 1].end_ms() };
                let span = lines[next].start_ms - prev_end;
                if span > 0.0 {
                    let progress = (t - prev_end) / span;
                    state.gap_progress = progress.clamp(0.0, 1.0) as f32;
                    state.in_gap = progress > 0.0 && progress < 1.0;
                }
            }
        }
    }

    state
}

/// 活动行内的活动音节。
///
/// 先按半开区间精确匹配（负时长钳制为 0 参与判断）；无命中时
/// 退回“最后一个已经结束的音节”，以覆盖零时长的前导音节。
fn resolve_word(words: &[crate::model::Word], t: f64) -> Option<usize> {
    let exact = words
        .iter()
        .position(|word| t >= word.start_ms && t < word.start_ms + word.display_duration_ms());
    if exact.is_some() {
        return exact;
    }

    let mut passed = None;
    for (index, word) in words.iter().enumerate() {
        if t >= word.end_ms() {
            passed = Some(index);
        }
    }
    passed
}
