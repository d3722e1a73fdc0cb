//! 面向传输层的编解码入口。
//!
//! 本模块不做任何网络请求：上游传输层负责取回字节流，
//! 这里只负责构造请求参数和把响应字节还原成歌词文本。

pub mod cipher;
pub mod frame;
pub mod text;

pub use cipher::{build_lyric_request_param, xor_stream};
pub use frame::{FrameError, extract_payload};
pub use text::{decode_best_effort, inflate};

use crate::error::Result;

/// 解码一次完整的歌词响应。
///
/// 流程：帧提取 → Zlib 解压 → （扩展格式：Base64 解码 + 异或解扰）
/// → 多编码文本解码。
///
/// `extended` 与请求时的 `lrcx` 标记一致，由调用方透传。
pub fn decode_lyric_response(raw: &[u8], extended: bool) -> Result<String> {
    let payload = frame::extract_payload(raw)?;
    let inflated = text::inflate(payload)?;

    if extended {
        let scrambled = text::base64_text_of(&inflated);
        let plain = cipher::unscramble_body(&scrambled)?;
        Ok(text::decode_best_effort(&plain))
    } else {
        Ok(text::decode_best_effort(&inflated))
    }
}
