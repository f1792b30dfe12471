use tracing::debug;

use crate::paragraph::{join, preprocess, split};
use crate::rules;
use crate::width::widen;

/// 前処理 → 段落分割 → 段落ごとにルール適用 → 結合
fn rewrite_paragraphs<F>(operation: &str, text: &str, rule: F) -> String
where
    F: Fn(&str) -> String,
{
    let paragraphs = split(&preprocess(text));
    let rewritten: Vec<String> = paragraphs.iter().map(|p| rule(p.as_str())).collect();

    let changed = paragraphs
        .iter()
        .zip(&rewritten)
        .filter(|(before, after)| before != after)
        .count();
    debug!(
        operation,
        paragraphs = paragraphs.len(),
        changed,
        "rewrote paragraphs"
    );

    join(&rewritten)
}

pub fn delete_end_spaces(text: &str) -> String {
    rewrite_paragraphs("delete_end_spaces", text, rules::trim_trailing)
}

pub fn insert_indent(text: &str, consider_dashes: bool) -> String {
    rewrite_paragraphs("insert_indent", text, |p| rules::indent(p, consider_dashes))
}

pub fn insert_space_after_reserved_marks(text: &str) -> String {
    rewrite_paragraphs(
        "insert_space_after_reserved_marks",
        text,
        rules::space_after_marks,
    )
}

pub fn delete_spaces_before_opening_bracket(text: &str, consider_dashes: bool) -> String {
    rewrite_paragraphs("delete_spaces_before_opening_bracket", text, |p| {
        rules::delete_space_before_opening_bracket(p, consider_dashes)
    })
}

pub fn delete_punctuations_before_closing_bracket(text: &str) -> String {
    rewrite_paragraphs(
        "delete_punctuations_before_closing_bracket",
        text,
        rules::delete_punctuation_before_closing_bracket,
    )
}

/// 段落に依存しないため文書全体をそのまま変換する
pub fn transform_half_width_to_full(text: &str) -> String {
    widen(text)
}
