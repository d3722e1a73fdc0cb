//! 以曲目为生命周期的会话状态。
//!
//! 每次解码产生一份不可变的行序列，曲目切换时整体替换而不是
//! 原地修改。解码可能晚于曲目切换返回（字节流来自进程外的传输
//! 层），所以每次解码都携带发起时的代次，迟到的旧结果被丢弃。

use crate::aligner::{self, DEFAULT_TOLERANCE_MS};
use crate::error::Result;
use crate::model::{Line, SyncState, TranslationMap};
use crate::sync;

/// 解码代次标识。只能由 [`LyricsSession::begin_track`] 发放。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// 一次成功解码的产物。
#[derive(Debug, Clone, Default)]
pub struct DecodedTrack {
    /// 主歌词行。
    pub lines: Vec<Line>,
    /// 翻译映射（没有翻译数据时为空）。
    pub translations: TranslationMap,
}

/// 当前曲目的歌词会话。
///
/// 单线程、回调驱动：引擎自身不持有线程，也没有需要加锁的
/// 共享可变状态。
#[derive(Debug, Default)]
pub struct LyricsSession {
    generation: u64,
    lines: Vec<Line>,
    translations: TranslationMap,
}

impl LyricsSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 宿主在曲目切换时调用：递增代次并清空上一曲目的状态。
    ///
    /// 返回的代次应随解码请求一起保存，并在 [`Self::install`]
    /// 时传回。
    pub fn begin_track(&mut self) -> Generation {
        self.generation += 1;
        self.lines = Vec::new();
        self.translations = TranslationMap::new();
        Generation(self.generation)
    }

    /// 安装一次解码的结果。
    ///
    /// 代次不匹配说明曲目已经切换，结果被丢弃并返回 `false`。
    /// 解码失败（歌词不可用）时安装空状态，这不是错误路径。
    pub fn install(&mut self, generation: Generation, outcome: Result<DecodedTrack>) -> bool {
        if generation.0 != self.generation {
            tracing::debug!(
                stale = generation.0,
                current = self.generation,
                "丢弃过期的解码结果"
            );
            return false;
        }
        match outcome {
            Ok(track) => {
                self.lines = track.lines;
                self.translations = track.translations;
            }
            Err(e) => {
                tracing::warn!("本曲目歌词不可用: {e}");
                self.lines = Vec::new();
                self.translations = TranslationMap::new();
            }
        }
        true
    }

    /// 当前曲目的歌词行快照。
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// 查询某行对应的翻译（默认容差窗口内的最近邻）。
    #[must_use]
    pub fn translation_for(&self, line: &Line) -> Option<&str> {
        aligner::nearest_translation(&self.translations, line.start_ms as u64, DEFAULT_TOLERANCE_MS)
    }

    /// 对给定播放时刻解析同步快照。
    ///
    /// 总是针对调用时刻的单一一致快照求解，无隐藏可变状态。
    #[must_use]
    pub fn resolve(&self, playback_ms: u32) -> SyncState {
        sync::resolve(&self.lines, playback_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FrameError, LyricsError};
    use crate::model::Word;

    fn track_with_one_line() -> DecodedTrack {
        DecodedTrack {
            lines: vec![Line {
                start_ms: 0.0,
                duration_ms: 1000.0,
                words: vec![Word {
                    start_ms: 0.0,
                    duration_ms: 1000.0,
                    text: "词".to_string(),
                }],
            }],
            translations: TranslationMap::new(),
        }
    }

    #[test]
    fn test_install_current_generation() {
        let mut session = LyricsSession::new();
        let generation = session.begin_track();
        assert!(session.install(generation, Ok(track_with_one_line())));
        assert_eq!(session.resolve(500).active_line_index, Some(0));
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut session = LyricsSession::new();
        let stale = session.begin_track();
        let current = session.begin_track();
        assert!(!session.install(stale, Ok(track_with_one_line())), "旧代次的结果必须被丢弃");
        assert!(session.lines().is_empty());
        assert!(session.install(current, Ok(track_with_one_line())));
        assert_eq!(session.lines().len(), 1);
    }

    #[test]
    fn test_decode_failure_installs_empty_state() {
        let mut session = LyricsSession::new();
        let generation = session.begin_track();
        let installed = session.install(
            generation,
            Err(LyricsError::Frame(FrameError::BadHeader)),
        );
        assert!(installed);
        assert!(session.lines().is_empty());
        assert_eq!(session.resolve(0), SyncState::default(), "无歌词时所有字段为 None/默认值");
    }

    #[test]
    fn test_track_change_replaces_snapshot() {
        let mut session = LyricsSession::new();
        let first = session.begin_track();
        session.install(first, Ok(track_with_one_line()));
        session.begin_track();
        assert!(session.lines().is_empty(), "曲目切换应整体替换旧快照");
    }

    #[test]
    fn test_translation_lookup_uses_nearest_match() {
        let mut session = LyricsSession::new();
        let generation = session.begin_track();
        let mut track = track_with_one_line();
        track.translations.insert(200, "译".to_string());
        session.install(generation, Ok(track));
        let line = session.lines()[0].clone();
        assert_eq!(session.translation_for(&line), Some("译"));
    }
}
