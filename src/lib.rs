//! 歌词传输解码与逐字同步引擎。
//!
//! 给定一个曲目标识，本 crate 负责：
//! 1. 构造混淆的歌词请求参数（[`codec::build_lyric_request_param`]）；
//! 2. 把专有二进制响应解码为明文（[`codec::decode_lyric_response`]）；
//! 3. 解析两种逐字歌词方言（[`parser::parse_lrcx`]、[`parser::parse_yrc`]）；
//! 4. 对齐翻译轨道并做双语聚类（[`aligner`]、[`cluster`]）；
//! 5. 对任意播放时刻解析活动行/活动字/间隙状态（[`sync::resolve`]）。
//!
//! 网络传输、音频播放与界面渲染都是本 crate 之外的协作方：
//! 这里只收字节、出结构化数据。

pub mod aligner;
pub mod cluster;
pub mod codec;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod sync;
mod utils;

pub use aligner::LineRole;
pub use codec::FrameError;
pub use error::{LyricsError, Result};
pub use model::{ClusteredLine, Line, SyncState, TranslationMap, Word};
pub use session::{DecodedTrack, Generation, LyricsSession};
