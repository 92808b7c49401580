use std::fmt;

use serde::Serialize;

use crate::error::ScanWarning;

/// Annotation keywords the scanner looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Todo,
    Fixme,
    Bug,
}

impl Keyword {
    pub const ALL: [Keyword; 3] = [Keyword::Todo, Keyword::Fixme, Keyword::Bug];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Todo => "TODO",
            Keyword::Fixme => "FIXME",
            Keyword::Bug => "BUG",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comment syntax families a keyword can appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSyntax {
    /// `// ...` (JavaScript, Java, C, C++, PHP)
    Line,
    /// `/* ... */` closed on the same line
    Block,
    /// `# ...` (Python)
    Hash,
    /// `<!-- ... -->` closed on the same line
    Html,
}

impl CommentSyntax {
    pub const ALL: [CommentSyntax; 4] =
        [CommentSyntax::Line, CommentSyntax::Block, CommentSyntax::Hash, CommentSyntax::Html];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentSyntax::Line => "line",
            CommentSyntax::Block => "block",
            CommentSyntax::Hash => "hash",
            CommentSyntax::Html => "html",
        }
    }
}

impl fmt::Display for CommentSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected comment annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Path relative to the scanned root, `/`-joined.
    #[serde(rename = "file")]
    pub file_path: String,
    /// 1-based.
    #[serde(rename = "line")]
    pub line_number: usize,
    /// Trimmed full match, keyword included.
    #[serde(rename = "comment")]
    pub comment_text: String,
}

impl Finding {
    pub fn new(file_path: impl Into<String>, line_number: usize, comment_text: impl Into<String>) -> Self {
        Finding { file_path: file_path.into(), line_number, comment_text: comment_text.into() }
    }

    pub fn location(&self) -> String {
        format!("{}:{}", self.file_path, self.line_number)
    }
}

/// Result of walking one directory tree.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub findings: Vec<Finding>,
    pub warnings: Vec<ScanWarning>,
}

impl WalkOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, mut other: WalkOutcome) {
        self.findings.append(&mut other.findings);
        self.warnings.append(&mut other.warnings);
    }
}
