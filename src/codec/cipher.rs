//! 请求参数混淆与扩展格式歌词正文的解扰。
//!
//! 两个方向都是同一种循环异或：`decode(encode(x)) == x`。

use base64::{Engine as _, engine::general_purpose};

use crate::error::Result;

/// 固定的 7 字节异或密钥。
pub(crate) const XOR_KEY: &[u8] = b"yeelion";

/// 对数据做循环密钥异或。
///
/// 该操作是对合的：对任意输入连续应用两次即还原原文。
/// 密钥长度无需整除数据长度，空输入返回空。
#[must_use]
pub fn xor_stream(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .enumerate()
        .map(|(i, byte)| byte ^ key[i % key.len()])
        .collect()
}

/// 构造发往传输层的歌词请求参数。
///
/// 明文形如 `user=12345,web,web,web&requester=localhost&req=1&rid=MUSIC_{id}`，
/// 请求扩展格式时追加 `&lrcx=1`；再对 UTF-8 字节异或并 Base64 编码。
#[must_use]
pub fn build_lyric_request_param(track_id: &str, extended: bool) -> String {
    let mut plain =
        format!("user=12345,web,web,web&requester=localhost&req=1&rid=MUSIC_{track_id}");
    if extended {
        plain.push_str("&lrcx=1");
    }
    general_purpose::STANDARD.encode(xor_stream(plain.as_bytes(), XOR_KEY))
}

/// 解扰扩展格式歌词正文：Base64 解码后再用同一密钥异或。
pub fn unscramble_body(base64_text: &str) -> Result<Vec<u8>> {
    let raw = general_purpose::STANDARD.decode(base64_text.trim().as_bytes())?;
    Ok(xor_stream(&raw, XOR_KEY))
}
