use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::LintError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintKind {
    DeleteEndSpaces,
    InsertIndent,
    InsertSpaceAfterMarks,
    DeleteSpacesBeforeOpeningBracket,
    DeletePunctuationsBeforeClosingBracket,
    WidenHalfWidth,
}

impl LintKind {
    pub const ALL: [LintKind; 6] = [
        LintKind::DeleteEndSpaces,
        LintKind::InsertIndent,
        LintKind::InsertSpaceAfterMarks,
        LintKind::DeleteSpacesBeforeOpeningBracket,
        LintKind::DeletePunctuationsBeforeClosingBracket,
        LintKind::WidenHalfWidth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LintKind::DeleteEndSpaces => "delete-end-spaces",
            LintKind::InsertIndent => "insert-indent",
            LintKind::InsertSpaceAfterMarks => "insert-space-after-marks",
            LintKind::DeleteSpacesBeforeOpeningBracket => "delete-spaces-before-opening-bracket",
            LintKind::DeletePunctuationsBeforeClosingBracket => "delete-punctuations-before-closing-bracket",
            LintKind::WidenHalfWidth => "widen-half-width",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LintKind::DeleteEndSpaces => "段落末の全角スペースを削除する",
            LintKind::InsertIndent => "地の文の段落頭に全角スペースで字下げする",
            LintKind::InsertSpaceAfterMarks => "感嘆符・疑問符の後に全角スペースを入れる",
            LintKind::DeleteSpacesBeforeOpeningBracket => "開き括弧の前のスペースを削除する",
            LintKind::DeletePunctuationsBeforeClosingBracket => "閉じ括弧の前の句読点を削除する",
            LintKind::WidenHalfWidth => "半角文字を全角に変換する",
        }
    }

    /// Whether the lint consults `LintOptions::consider_dashes`.
    pub fn uses_dashes(&self) -> bool {
        matches!(
            self,
            LintKind::InsertIndent | LintKind::DeleteSpacesBeforeOpeningBracket
        )
    }
}

impl fmt::Display for LintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LintKind {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        LintKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| LintError::UnknownLint {
                name: name.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintOptions {
    /// ダッシュ（―）を会話文の開始・開き括弧と同様に扱う
    pub consider_dashes: bool,
    pub pipeline: Vec<LintKind>,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            consider_dashes: true,
            pipeline: Self::default_pipeline(),
        }
    }
}

impl LintOptions {
    fn default_pipeline() -> Vec<LintKind> {
        vec![
            LintKind::DeletePunctuationsBeforeClosingBracket,
            LintKind::InsertSpaceAfterMarks,
            LintKind::DeleteSpacesBeforeOpeningBracket,
            LintKind::DeleteEndSpaces,
            LintKind::InsertIndent,
        ]
    }

    pub fn with_pipeline(mut self, pipeline: Vec<LintKind>) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn ignore_dashes(mut self) -> Self {
        self.consider_dashes = false;
        self
    }
}
