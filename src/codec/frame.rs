//! 歌词响应的帧提取。
//!
//! 响应以 ASCII 头部 `tp=content` 开始，第一个 `\r\n\r\n` 之后
//! 才是压缩负载。此处是纯字节扫描，对头部区域不做编码假设。

use thiserror::Error;

const FRAME_HEADER: &[u8] = b"tp=content";
const BOUNDARY: &[u8] = b"\r\n\r\n";

/// 帧提取失败的原因。对上层统一意味着“本曲目无歌词”。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// 响应不以 `tp=content` 开头。
    #[error("响应头无效")]
    BadHeader,
    /// 找不到 CRLFCRLF 负载边界。
    #[error("未找到负载边界")]
    NoBoundary,
}

/// 从原始响应中定位压缩负载。
pub fn extract_payload(raw: &[u8]) -> Result<&[u8], FrameError> {
    if !raw.starts_with(FRAME_HEADER) {
        return Err(FrameError::BadHeader);
    }
    let boundary_pos = raw
        .windows(BOUNDARY.len())
        .position(|window| window == BOUNDARY)
        .ok_or(FrameError::NoBoundary)?;
    Ok(&raw[boundary_pos + BOUNDARY.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_payload_after_boundary() {
        let raw = b"tp=content\r\nmore\r\n\r\nPAYLOAD";
        assert_eq!(extract_payload(raw), Ok(&b"PAYLOAD"[..]));
    }

    #[test]
    fn test_missing_header_is_bad_header() {
        assert_eq!(
            extract_payload(b"tp=none\r\n\r\nPAYLOAD"),
            Err(FrameError::BadHeader)
        );
        assert_eq!(extract_payload(b""), Err(FrameError::BadHeader));
    }

    #[test]
    fn test_missing_boundary() {
        assert_eq!(
            extract_payload(b"tp=content\r\nno-boundary-here"),
            Err(FrameError::NoBoundary)
        );
    }

    #[test]
    fn test_empty_payload_is_allowed() {
        assert_eq!(extract_payload(b"tp=content\r\n\r\n"), Ok(&b""[..]));
    }
}
