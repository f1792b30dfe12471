use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A manuscript loaded for linting.
///
/// `text` holds `\n` line feeds only when CRLF normalization is on, and never
/// includes the file's terminating line feed, so that it is not read as a
/// trailing empty paragraph.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: Source,
    pub text: String,
    crlf: bool,
    trailing_newline: bool,
}

impl Document {
    pub fn from_text(source: Source, raw: String, normalize_crlf: bool) -> Self {
        let crlf = normalize_crlf && raw.contains("\r\n");
        let mut text = if crlf { raw.replace("\r\n", "\n") } else { raw };

        let trailing_newline = text.ends_with('\n');
        if trailing_newline {
            text.pop();
        }

        Self {
            source,
            text,
            crlf,
            trailing_newline,
        }
    }

    pub fn read_file(path: &Path, normalize_crlf: bool) -> Result<Self, CliError> {
        let bytes = fs::read(path)
            .map_err(|e| CliError::file_operation(path.to_path_buf(), e.to_string()))?;
        let raw = String::from_utf8(bytes)
            .map_err(|_| CliError::file_operation(path.to_path_buf(), "not valid UTF-8"))?;
        Ok(Self::from_text(Source::File(path.to_path_buf()), raw, normalize_crlf))
    }

    pub fn read_stdin(normalize_crlf: bool) -> Result<Self, CliError> {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(Self::from_text(Source::Stdin, raw, normalize_crlf))
    }

    /// Restores the original line endings on lint output.
    pub fn render(&self, text: &str) -> String {
        let mut rendered = text.to_string();
        if self.trailing_newline {
            rendered.push('\n');
        }
        if self.crlf {
            rendered = rendered.replace('\n', "\r\n");
        }
        rendered
    }

    pub fn write_back(&self, text: &str) -> Result<(), CliError> {
        match &self.source {
            Source::File(path) => fs::write(path, self.render(text))
                .map_err(|e| CliError::file_operation(path.clone(), e.to_string())),
            Source::Stdin => Err(CliError::invalid_args("cannot write back to stdin")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_crlf_is_normalized_and_restored() {
        let doc = Document::from_text(Source::Stdin, "古池や　\r\n水の音\r\n".to_string(), true);
        assert_eq!(doc.text, "古池や　\n水の音");
        assert_eq!(doc.render("古池や\n水の音"), "古池や\r\n水の音\r\n");
    }

    #[test]
    fn test_crlf_kept_when_disabled() {
        let doc = Document::from_text(Source::Stdin, "古池や\r\n水の音".to_string(), false);
        assert_eq!(doc.text, "古池や\r\n水の音");
        assert_eq!(doc.render(&doc.text), "古池や\r\n水の音");
    }

    #[test]
    fn test_terminating_line_feed_is_not_a_paragraph() {
        let doc = Document::from_text(Source::Stdin, "古池や\n\n".to_string(), true);
        assert_eq!(doc.text, "古池や\n");
        assert_eq!(doc.render("　古池や\n　"), "　古池や\n　\n");
    }

    #[test]
    fn test_read_and_write_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("draft.txt");
        fs::write(&path, "古池や\r\n").unwrap();

        let doc = Document::read_file(&path, true).unwrap();
        assert_eq!(doc.source, Source::File(path.clone()));
        assert_eq!(doc.text, "古池や");
        doc.write_back("　古池や").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "　古池や\r\n");
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sjis.txt");
        fs::write(&path, [0x82, 0xa0, 0xff]).unwrap();

        let err = Document::read_file(&path, true).unwrap_err();
        assert!(matches!(err, CliError::FileOperation { .. }));
    }

    #[test]
    fn test_write_back_to_stdin_fails() {
        let doc = Document::from_text(Source::Stdin, String::new(), true);
        assert!(doc.write_back("").is_err());
    }
}
