//! 文本分类与显示文本重建的小工具。

use crate::model::Word;

/// 码点是否落在 CJK 范围（汉字、假名、谚文）。
#[must_use]
pub(crate) const fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{3040}'..='\u{30FF}'
        | '\u{AC00}'..='\u{D7AF}'
    )
}

/// 是否为标点（ASCII 标点或 CJK 标点/全角区）。
#[must_use]
pub(crate) const fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '\u{3000}'..='\u{303F}' | '\u{FF00}'..='\u{FFEF}')
}

/// 把音节序列拼回一行显示文本。
///
/// 相邻音节之间：任一侧是标点或 CJK 字符时不插空格，否则插一个空格。
#[must_use]
pub(crate) fn join_words(words: &[Word]) -> String {
    let mut out = String::new();
    for word in words {
        let text = word.text.as_str();
        if text.is_empty() {
            continue;
        }
        if !out.is_empty()
            && let (Some(prev), Some(next)) = (out.chars().next_back(), text.chars().next())
            && !needs_no_space(prev, next)
        {
            out.push(' ');
        }
        out.push_str(text);
    }
    out
}

fn needs_no_space(prev: char, next: char) -> bool {
    prev.is_whitespace()
        || next.is_whitespace()
        || is_cjk(prev)
        || is_cjk(next)
        || is_punctuation(prev)
        || is_punctuation(next)
}
