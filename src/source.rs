use crate::error::{ChRot13Error, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Marker that makes `--file` read standard input
pub const STDIN_MARKER: &str = "-";

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
    Literal(String),
}

impl Source {
    /// Pick exactly one source
    /// Precedence: file > literal text > positional words > piped stdin
    pub fn resolve(
        file: Option<&Path>,
        text: Option<&str>,
        words: &[String],
        stdin_is_terminal: bool,
    ) -> Result<Self> {
        if let Some(path) = file {
            if path.as_os_str() == STDIN_MARKER {
                return Ok(Self::Stdin);
            }
            return Ok(Self::File(path.to_path_buf()));
        }
        if let Some(text) = text {
            return Ok(Self::Literal(text.to_string()));
        }
        if !words.is_empty() {
            return Ok(Self::Literal(words.join(" ")));
        }
        if !stdin_is_terminal {
            return Ok(Self::Stdin);
        }
        Err(ChRot13Error::NoInput)
    }

    /// Human readable label for status lines
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => format!("Processing file: {}", path.display()),
            Self::Stdin => "Reading from standard input...".to_string(),
            Self::Literal(_) => "Processing text input...".to_string(),
        }
    }

    /// Read the whole input as UTF-8 text
    /// `stdin` is only consumed for [`Source::Stdin`]
    pub fn read<R: Read>(&self, stdin: R) -> Result<String> {
        match self {
            Self::Literal(text) => Ok(text.clone()),
            Self::Stdin => read_all(stdin, "<stdin>"),
            Self::File(path) => {
                if !path.exists() {
                    return Err(ChRot13Error::FileNotFound(path.clone()));
                }
                let file = std::fs::File::open(path)
                    .map_err(|e| ChRot13Error::from_io(path, e))?;
                read_all(file, &path.display().to_string())
            }
        }
    }
}

fn read_all<R: Read>(mut reader: R, label: &str) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| ChRot13Error::from_io(label, e))?;
    String::from_utf8(bytes).map_err(|_| ChRot13Error::Encoding(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};
    use tempfile::tempdir;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_file_beats_everything() {
        let source = Source::resolve(
            Some(Path::new("in.txt")),
            Some("literal"),
            &words(&["a", "b"]),
            false,
        )
        .unwrap();
        assert_eq!(source, Source::File(PathBuf::from("in.txt")));
    }

    #[test]
    fn test_dash_means_stdin() {
        let source = Source::resolve(Some(Path::new("-")), None, &[], true).unwrap();
        assert_eq!(source, Source::Stdin);
    }

    #[test]
    fn test_text_beats_words_and_stdin() {
        let source = Source::resolve(None, Some("hi"), &words(&["x"]), false).unwrap();
        assert_eq!(source, Source::Literal("hi".into()));
    }

    #[test]
    fn test_words_are_joined() {
        let source = Source::resolve(None, None, &words(&["Hello,", "World!"]), false).unwrap();
        assert_eq!(source, Source::Literal("Hello, World!".into()));
    }

    #[test]
    fn test_piped_stdin_fallback() {
        assert_eq!(Source::resolve(None, None, &[], false).unwrap(), Source::Stdin);
    }

    #[test]
    fn test_terminal_without_input_is_error() {
        assert!(matches!(
            Source::resolve(None, None, &[], true),
            Err(ChRot13Error::NoInput)
        ));
    }

    #[test]
    fn test_read_literal_ignores_stdin() {
        let source = Source::Literal("abc".into());
        assert_eq!(source.read(Cursor::new("ignored")).unwrap(), "abc");
    }

    #[test]
    fn test_read_stdin() {
        let text = Source::Stdin.read(Cursor::new("piped text\n")).unwrap();
        assert_eq!(text, "piped text\n");
    }

    #[test]
    fn test_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "Uryyb").unwrap();
        let text = Source::File(path).read(io::empty()).unwrap();
        assert_eq!(text, "Uryyb");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = Source::File(path.clone()).read(io::empty()).unwrap_err();
        assert!(matches!(err, ChRot13Error::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let err = Source::File(path).read(io::empty()).unwrap_err();
        assert!(matches!(err, ChRot13Error::Encoding(_)));

        let err = Source::Stdin.read(Cursor::new(vec![0x80u8])).unwrap_err();
        assert!(matches!(err, ChRot13Error::Encoding(label) if label == "<stdin>"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Source::File(PathBuf::from("a.txt")).describe(),
            "Processing file: a.txt"
        );
        assert_eq!(Source::Stdin.describe(), "Reading from standard input...");
        assert_eq!(
            Source::Literal(String::new()).describe(),
            "Processing text input..."
        );
    }
}
