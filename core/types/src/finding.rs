use serde::{Deserialize, Serialize};
use crate::lint::LintKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: LintKind,
    /// 1始まりの段落番号（行番号と一致する）
    pub line: usize,
    pub before: String,
    pub after: String,
}

impl Finding {
    pub fn new(kind: LintKind, line: usize, before: String, after: String) -> Self {
        Self {
            kind,
            line,
            before,
            after,
        }
    }
}
