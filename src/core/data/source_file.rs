use std::path::Path;

/// Kind of source file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `.cs`
    CSharp,
    /// `.axaml`
    Xaml,
}

impl FileKind {
    /// Extension comparison is case-insensitive (`Foo.CS` is C#).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "cs" => Some(Self::CSharp),
            "axaml" => Some(Self::Xaml),
            _ => None,
        }
    }

    pub fn is_xaml(&self) -> bool {
        matches!(self, FileKind::Xaml)
    }
}

/// A source file read into memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as displayed in reports (relative to the project root).
    pub path: String,
    pub kind: FileKind,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, kind: FileKind, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            content: content.into(),
        }
    }

    /// Decode raw bytes, replacing invalid UTF-8 with U+FFFD.
    pub fn from_bytes(path: impl Into<String>, kind: FileKind, bytes: &[u8]) -> Self {
        Self::new(path, kind, String::from_utf8_lossy(bytes))
    }

    /// Lines without terminators (`\r\n` and `\n`).
    pub fn lines(&self) -> Vec<&str> {
        self.content.lines().collect()
    }
}

/// Line `line` (1-based) of `lines`, or `""` when out of range.
pub fn line_at<'a>(lines: &[&'a str], line: usize) -> &'a str {
    line.checked_sub(1)
        .and_then(|idx| lines.get(idx))
        .copied()
        .unwrap_or("")
}
