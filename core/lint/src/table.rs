use tracing::trace;

/// 置換テーブル：(検索文字列, 置換文字列) の順序付きリスト
pub type ReplacementTable = [(&'static str, &'static str)];

/// テーブルの各エントリを宣言順に一度ずつ適用する。
/// 各エントリは直前のエントリの結果全体を走査する（正規表現ではなく単純な部分文字列置換）。
pub fn apply_table(paragraph: &str, table: &ReplacementTable) -> String {
    table
        .iter()
        .fold(paragraph.to_string(), |acc, (pattern, replacement)| {
            acc.replace(pattern, replacement)
        })
}

/// 結果が変化しなくなるまでルールを繰り返し適用する。
/// 停止するのは各ルールが恒等でない適用で必ず文字列を短くするため。
pub fn fixed_point<F>(paragraph: &str, rule: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut current = paragraph.to_string();
    let mut iterations = 0usize;
    loop {
        let next = rule(&current);
        if next == current {
            trace!(iterations, "fixed point reached");
            return current;
        }
        current = next;
        iterations += 1;
    }
}

/// `apply_table` を不動点まで繰り返す
pub fn apply_table_until_stable(paragraph: &str, table: &ReplacementTable) -> String {
    fixed_point(paragraph, |p| apply_table(p, table))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLAPSE: &ReplacementTable = &[("　　", "　")];

    #[test]
    fn test_apply_table_single_pass() {
        // 1パスでは重ならない出現のみ置換される
        assert_eq!(apply_table("a　　　b", COLLAPSE), "a　　b");
        assert_eq!(apply_table("", COLLAPSE), "");
    }

    #[test]
    fn test_apply_table_until_stable() {
        assert_eq!(apply_table_until_stable("a　　　　　b", COLLAPSE), "a　b");
    }

    #[test]
    fn test_entries_see_earlier_replacements() {
        let table: &ReplacementTable = &[("ab", "b"), ("bc", "c")];
        assert_eq!(apply_table("abc", table), "c");
    }

    #[test]
    fn test_fixed_point_identity() {
        assert_eq!(fixed_point("小説", |p| p.to_string()), "小説");
    }

    #[test]
    fn test_fixed_point_shrinking_rule() {
        let result = fixed_point("xxxxy", |p| p.strip_prefix('x').unwrap_or(p).to_string());
        assert_eq!(result, "y");
    }
}
