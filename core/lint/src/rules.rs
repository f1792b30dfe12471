use crate::paragraph::FULL_WIDTH_SPACE;
use crate::table::{apply_table_until_stable, fixed_point, ReplacementTable};

/// 感嘆符・疑問符
pub const RESERVED_MARKS: [char; 8] = ['！', '？', '!', '?', '‼', '⁉', '⁈', '⁇'];

/// 会話文の開始とみなす括弧
pub const DIALOGUE_OPENERS: [char; 3] = ['「', '『', '（'];

pub const DASH: char = '―';

// 記号前後の余分なスペース
const MARK_CLEANUP_TABLE: &ReplacementTable = &[
    ("　！", "！"),
    ("　？", "？"),
    ("　!", "!"),
    ("　?", "?"),
    ("　‼", "‼"),
    ("　⁉", "⁉"),
    ("　⁈", "⁈"),
    ("　⁇", "⁇"),
    ("　」", "」"),
    ("　』", "』"),
    ("　）", "）"),
    ("！　　", "！　"),
    ("？　　", "？　"),
    ("!　　", "!　"),
    ("?　　", "?　"),
    ("‼　　", "‼　"),
    ("⁉　　", "⁉　"),
    ("⁈　　", "⁈　"),
    ("⁇　　", "⁇　"),
];

const OPENING_BRACKET_TABLE: &ReplacementTable = &[
    ("　「", "「"),
    ("　『", "『"),
    ("　（", "（"),
];

const OPENING_BRACKET_WITH_DASH_TABLE: &ReplacementTable = &[
    ("　「", "「"),
    ("　『", "『"),
    ("　（", "（"),
    ("　―", "―"),
];

const CLOSING_BRACKET_TABLE: &ReplacementTable = &[
    ("、」", "」"),
    ("。」", "」"),
    ("、』", "』"),
    ("。』", "』"),
    ("、）", "）"),
    ("。）", "）"),
];

fn opening_bracket_table(consider_dashes: bool) -> &'static ReplacementTable {
    if consider_dashes {
        OPENING_BRACKET_WITH_DASH_TABLE
    } else {
        OPENING_BRACKET_TABLE
    }
}

/// 段落末の全角スペースを一つ削除する
pub fn delete_end_space(paragraph: &str) -> String {
    paragraph
        .strip_suffix(FULL_WIDTH_SPACE)
        .unwrap_or(paragraph)
        .to_string()
}

pub fn trim_trailing(paragraph: &str) -> String {
    fixed_point(paragraph, delete_end_space)
}

pub fn is_indented(paragraph: &str) -> bool {
    paragraph.starts_with(FULL_WIDTH_SPACE)
}

pub fn is_dialogue(paragraph: &str, consider_dashes: bool) -> bool {
    match paragraph.chars().next() {
        Some(c) => DIALOGUE_OPENERS.contains(&c) || (consider_dashes && c == DASH),
        None => false,
    }
}

/// 字下げ済みでも会話文でもなければ全角スペースで字下げする。
/// 空の段落も字下げの対象になる。
pub fn indent(paragraph: &str, consider_dashes: bool) -> String {
    if is_indented(paragraph) || is_dialogue(paragraph, consider_dashes) {
        return paragraph.to_string();
    }
    let mut indented = String::with_capacity(paragraph.len() + FULL_WIDTH_SPACE.len_utf8());
    indented.push(FULL_WIDTH_SPACE);
    indented.push_str(paragraph);
    indented
}

/// 各記号の直後に全角スペースを一つ挿入する（1パスのみ）
pub fn insert_space_after_marks(paragraph: &str) -> String {
    let mut result = String::with_capacity(paragraph.len());
    for c in paragraph.chars() {
        result.push(c);
        if RESERVED_MARKS.contains(&c) {
            result.push(FULL_WIDTH_SPACE);
        }
    }
    result
}

pub fn delete_unnecessary_spaces(paragraph: &str) -> String {
    apply_table_until_stable(paragraph, MARK_CLEANUP_TABLE)
}

pub fn space_after_marks(paragraph: &str) -> String {
    // 1) とりあえず挿入
    let inserted = insert_space_after_marks(paragraph);
    // 2) 記号前後の不要なスペースを削除
    let cleaned = delete_unnecessary_spaces(&inserted);
    // 3) 段落末のスペースを削除
    trim_trailing(&cleaned)
}

pub fn delete_space_before_opening_bracket(paragraph: &str, consider_dashes: bool) -> String {
    apply_table_until_stable(paragraph, opening_bracket_table(consider_dashes))
}

pub fn delete_punctuation_before_closing_bracket(paragraph: &str) -> String {
    apply_table_until_stable(paragraph, CLOSING_BRACKET_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_end_space() {
        assert_eq!(delete_end_space(""), "");
        assert_eq!(delete_end_space("　"), "");
        assert_eq!(delete_end_space("小説　"), "小説");
        assert_eq!(delete_end_space("小説"), "小説");
        assert_eq!(delete_end_space("小説　　"), "小説　");
    }

    #[test]
    fn test_trim_trailing() {
        assert_eq!(trim_trailing("水の音　　　"), "水の音");
        assert_eq!(trim_trailing("　　"), "");
        // 半角スペースは対象外
        assert_eq!(trim_trailing("水の音 "), "水の音 ");
    }

    #[test]
    fn test_is_dialogue() {
        assert!(!is_dialogue("", true));
        assert!(!is_dialogue("　", true));
        assert!(!is_dialogue("小説", true));
        assert!(is_dialogue("「小説」", true));
        assert!(is_dialogue("『小説』", true));
        assert!(is_dialogue("（小説）", true));
        assert!(is_dialogue("――小説", true));
        assert!(!is_dialogue("――小説", false));
    }

    #[test]
    fn test_is_indented() {
        assert!(!is_indented(""));
        assert!(is_indented("　"));
        assert!(!is_indented("小説"));
        assert!(is_indented("　「小説」"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("小説", true), "　小説");
        assert_eq!(indent("　小説", true), "　小説");
        assert_eq!(indent("「小説」", true), "「小説」");
        assert_eq!(indent("――小説", true), "――小説");
        assert_eq!(indent("――小説", false), "　――小説");
    }

    #[test]
    fn test_indent_empty_paragraph() {
        assert_eq!(indent("", true), "　");
        assert_eq!(indent("　", true), "　");
    }

    #[test]
    fn test_insert_space_after_marks() {
        let cases = [
            ("粉砕！玉砕！大喝采！", "粉砕！　玉砕！　大喝采！　"),
            ("粉砕？玉砕？大喝采？", "粉砕？　玉砕？　大喝采？　"),
            ("粉砕!玉砕!大喝采!", "粉砕!　玉砕!　大喝采!　"),
            ("粉砕?玉砕?大喝采?", "粉砕?　玉砕?　大喝采?　"),
            ("粉砕‼玉砕‼大喝采‼", "粉砕‼　玉砕‼　大喝采‼　"),
            ("粉砕⁉玉砕⁉大喝采⁉", "粉砕⁉　玉砕⁉　大喝采⁉　"),
            ("粉砕⁈玉砕⁈大喝采⁈", "粉砕⁈　玉砕⁈　大喝采⁈　"),
            ("粉砕⁇玉砕⁇大喝采⁇", "粉砕⁇　玉砕⁇　大喝采⁇　"),
        ];
        for (input, expected) in cases {
            assert_eq!(insert_space_after_marks(input), expected);
        }
        assert_eq!(insert_space_after_marks("！？"), "！　？　");
    }

    #[test]
    fn test_delete_unnecessary_spaces() {
        assert_eq!(
            delete_unnecessary_spaces("粉砕　！玉砕　！　大喝采！　　"),
            "粉砕！玉砕！　大喝采！　"
        );
        assert_eq!(delete_unnecessary_spaces("なに！　　　　"), "なに！　");
    }

    #[test]
    fn test_space_after_marks() {
        assert_eq!(space_after_marks("古池！や！"), "古池！　や！");
        assert_eq!(space_after_marks("「蛙飛びこむ！？」"), "「蛙飛びこむ！？」");
        assert_eq!(space_after_marks("水？　の音！！　"), "水？　の音！！");
        assert_eq!(space_after_marks("（えっ！）"), "（えっ！）");
        assert_eq!(space_after_marks(""), "");
    }

    #[test]
    fn test_delete_space_before_opening_bracket() {
        assert_eq!(delete_space_before_opening_bracket("　「小説」", true), "「小説」");
        assert_eq!(delete_space_before_opening_bracket("　　『小説』", true), "『小説』");
        assert_eq!(delete_space_before_opening_bracket("彼は　（小声で）", true), "彼は（小声で）");
        assert_eq!(delete_space_before_opening_bracket("　古池や", true), "　古池や");
    }

    #[test]
    fn test_delete_space_before_dash() {
        assert_eq!(delete_space_before_opening_bracket("　　――待て", true), "――待て");
        assert_eq!(delete_space_before_opening_bracket("　　――待て", false), "　　――待て");
    }

    #[test]
    fn test_delete_punctuation_before_closing_bracket() {
        assert_eq!(delete_punctuation_before_closing_bracket("「小説。」"), "「小説」");
        assert_eq!(delete_punctuation_before_closing_bracket("『小説、』"), "『小説』");
        assert_eq!(delete_punctuation_before_closing_bracket("（小説。、。）"), "（小説）");
        assert_eq!(delete_punctuation_before_closing_bracket("小説。"), "小説。");
    }
}
