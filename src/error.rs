use std::num::ParseIntError;

use thiserror::Error;

pub use crate::codec::frame::FrameError;

/// 歌词解码与解析过程中可能发生的各种错误。
///
/// 按照约定，`Frame` 和 `Inflate` 两类错误对上层只意味着
/// “该曲目没有歌词”，不应当中断调用方的正常流程。
#[derive(Debug, Error)]
pub enum LyricsError {
    /// 响应帧格式错误（头部无效或找不到负载边界）。
    #[error("歌词响应帧无效: {0}")]
    Frame(#[from] FrameError),

    /// Zlib 解压缩失败。
    #[error("Zlib 解压缩失败: {0}")]
    Inflate(#[source] std::io::Error),

    /// Base64 解码错误。
    #[error("Base64 解码错误: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// 无效的时间格式。
    #[error("无效的时间格式: {0}")]
    InvalidTime(String),

    /// 歌词内容解析失败。
    #[error("歌词解析失败: {0}")]
    Parse(String),
}

impl From<ParseIntError> for LyricsError {
    fn from(err: ParseIntError) -> Self {
        Self::InvalidTime(format!("整数解析失败: {err}"))
    }
}

impl LyricsError {
    /// 该错误是否应被上层视为“本曲目无歌词”。
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Frame(_) | Self::Inflate(_))
    }
}

pub type Result<T> = std::result::Result<T, LyricsError>;
