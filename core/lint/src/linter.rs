use tracing::debug;
use novellint_types::{Finding, LintKind, LintOptions};

use crate::ops;
use crate::paragraph::split;

pub struct Linter {
    options: LintOptions,
}

impl Linter {
    pub fn new(options: LintOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, kind: LintKind, text: &str) -> String {
        let dashes = self.options.consider_dashes;
        match kind {
            LintKind::DeleteEndSpaces => ops::delete_end_spaces(text),
            LintKind::InsertIndent => ops::insert_indent(text, dashes),
            LintKind::InsertSpaceAfterMarks => ops::insert_space_after_reserved_marks(text),
            LintKind::DeleteSpacesBeforeOpeningBracket => {
                ops::delete_spaces_before_opening_bracket(text, dashes)
            }
            LintKind::DeletePunctuationsBeforeClosingBracket => {
                ops::delete_punctuations_before_closing_bracket(text)
            }
            LintKind::WidenHalfWidth => ops::transform_half_width_to_full(text),
        }
    }

    /// パイプラインのルールを順に適用する
    pub fn apply(&self, text: &str) -> String {
        self.options
            .pipeline
            .iter()
            .fold(text.to_string(), |acc, &kind| {
                debug!(lint = %kind, "applying lint");
                self.run(kind, &acc)
            })
    }

    /// `apply` で変化する段落を報告する（文書は変更しない）。
    ///
    /// 各段落は、パイプラインの途中で最初にその段落を書き換えたルールに帰属させる。
    /// 途中で変化しても最終結果が元と同じ段落は報告しない。
    pub fn check(&self, text: &str) -> Vec<Finding> {
        let original = split(text);
        let mut blame: Vec<Option<LintKind>> = vec![None; original.len()];
        let mut current = text.to_string();

        for &kind in &self.options.pipeline {
            let rewritten = self.run(kind, &current);
            let before = split(&current);
            let after = split(&rewritten);
            // どのルールも段落数を保つ
            debug_assert_eq!(before.len(), after.len());

            for (index, (b, a)) in before.iter().zip(&after).enumerate() {
                if b != a {
                    if let Some(slot) = blame.get_mut(index) {
                        slot.get_or_insert(kind);
                    }
                }
            }
            current = rewritten;
        }

        let findings: Vec<Finding> = original
            .into_iter()
            .zip(split(&current))
            .zip(blame)
            .enumerate()
            .filter_map(|(index, ((before, after), kind))| match kind {
                Some(kind) if before != after => {
                    Some(Finding::new(kind, index + 1, before, after))
                }
                _ => None,
            })
            .collect();

        debug!(findings = findings.len(), "check finished");
        findings
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintOptions::default())
    }
}
