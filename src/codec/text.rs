//! 负载解压缩与多编码文本解码。

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::{LyricsError, Result};

/// 解压缩歌词负载（Zlib inflate，非 gzip 封装）。
///
/// 任何解压错误对调用链都是非致命的，上层将其统一处理为
/// “本曲目无歌词”。
pub fn inflate(payload: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(payload);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(LyricsError::Inflate)?;
    Ok(decompressed)
}

/// 将字节序列尽力解码为文本，绝不硬失败。
///
/// 优先按 GB18030 解码，无法映射的序列以替换字符填充；
/// 若 GB18030 解码出错而严格 UTF-8 能成功，则改用后者。
#[must_use]
pub fn decode_best_effort(bytes: &[u8]) -> String {
    let (decoded, _, had_errors) = encoding_rs::GB18030.decode(bytes);
    if had_errors && let Ok(utf8) = std::str::from_utf8(bytes) {
        return utf8.to_string();
    }
    decoded.into_owned()
}

/// 取出扩展格式正文解压后的 Base64 ASCII 文本。
///
/// 观测到的不一致：部分负载是合法的 UTF-8 ASCII，部分在 Base64
/// 阶段之前无法严格解码。先按严格 UTF-8 读取，失败时把每个字节
/// 直接当作 Base64 字母表字符处理。
#[must_use]
pub fn base64_text_of(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
