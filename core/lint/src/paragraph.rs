use crate::table::{apply_table, ReplacementTable};

pub const FULL_WIDTH_SPACE: char = '　';
pub const LINE_FEED: char = '\n';

// 半角の空白・括弧を全角へ
const PREPROCESS_TABLE: &ReplacementTable = &[
    (" ", "　"),
    ("｢", "「"),
    ("｣", "」"),
    ("(", "（"),
    (")", "）"),
];

pub fn preprocess(text: &str) -> String {
    apply_table(text, PREPROCESS_TABLE)
}

/// 改行で段落に分割する。空文字列でも空の段落を一つ返す。
pub fn split(text: &str) -> Vec<String> {
    text.split(LINE_FEED).map(str::to_string).collect()
}

pub fn join(paragraphs: &[String]) -> String {
    paragraphs.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess() {
        assert_eq!(preprocess("｢小説 ()｣"), "「小説　（）」");
        assert_eq!(preprocess(""), "");
    }

    #[test]
    fn test_split_and_join() {
        let text = "古池や\n蛙飛びこむ\n水の音";
        let paragraphs = split(text);
        assert_eq!(paragraphs, vec!["古池や", "蛙飛びこむ", "水の音"]);
        assert_eq!(join(&paragraphs), text);
    }

    #[test]
    fn test_split_keeps_empty_paragraphs() {
        assert_eq!(split(""), vec![""]);
        assert_eq!(split("\n"), vec!["", ""]);
        assert_eq!(split("\n古池や\n\n").len(), 4);
    }

    #[test]
    fn test_round_trip() {
        for text in ["", "\n", "\n\n", "古池や", "古池や\n", "\n古池や\n\n水の音\n"] {
            assert_eq!(join(&split(text)), text);
        }
    }
}
