use unicode_normalization::UnicodeNormalization;

use crate::paragraph::FULL_WIDTH_SPACE;

// ASCII (U+0021..U+007E) と全角形 (U+FF01..U+FF5E) の差分
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

const COMBINING_VOICED_MARK: char = '\u{3099}';
const COMBINING_SEMI_VOICED_MARK: char = '\u{309A}';

const HALF_WIDTH_VOICED_MARK: char = '\u{FF9E}';
const HALF_WIDTH_SEMI_VOICED_MARK: char = '\u{FF9F}';

fn is_half_width_form(c: char) -> bool {
    // 半角カナ・句読点、半角記号
    matches!(c, '\u{FF61}'..='\u{FF9F}' | '\u{FFE8}'..='\u{FFEE}')
}

// 濁点・半濁点と合成しうる全角のかな（゛や ゝ などの記号は含めない）
fn is_kana_letter(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{30A1}'..='\u{30FA}')
}

/// 半角文字を全角に変換する。変換できない文字はそのまま残す。
pub fn widen(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' => result.push(FULL_WIDTH_SPACE),
            '!'..='~' => {
                result.push(char::from_u32(c as u32 + FULL_WIDTH_OFFSET).unwrap_or(c));
            }
            '¢' => result.push('￠'),
            '£' => result.push('￡'),
            '¬' => result.push('￢'),
            '¯' => result.push('￣'),
            '¦' => result.push('￤'),
            '¥' => result.push('￥'),
            '₩' => result.push('￦'),
            c if is_half_width_form(c) => {
                // 濁点・半濁点を直前のカナと合成するため連続する半角形をまとめて NFKC にかける
                let mut run = String::new();
                if matches!(c, HALF_WIDTH_VOICED_MARK | HALF_WIDTH_SEMI_VOICED_MARK) {
                    if let Some(kana) = result.chars().next_back().filter(|&k| is_kana_letter(k)) {
                        result.pop();
                        run.push(kana);
                    }
                }
                run.push(c);
                while let Some(&next) = chars.peek() {
                    if !is_half_width_form(next) {
                        break;
                    }
                    run.push(next);
                    chars.next();
                }
                result.extend(run.nfkc().map(spacing_sound_mark));
            }
            _ => result.push(c),
        }
    }

    result
}

// 合成できずに残った結合用濁点・半濁点は単独の全角記号にする
fn spacing_sound_mark(c: char) -> char {
    match c {
        COMBINING_VOICED_MARK => '゛',
        COMBINING_SEMI_VOICED_MARK => '゜',
        _ => c,
    }
}
