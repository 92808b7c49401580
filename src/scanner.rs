use tracing::debug;

use crate::access::FileHandle;
use crate::error::ScanWarning;
use crate::model::Finding;
use crate::patterns::match_line;

/// Suffixes of files worth scanning. Matched case-sensitively against the
/// entry name.
pub const EXTENSION_ALLOWLIST: &[&str] = &[
    ".js", ".jsx", // JavaScript
    ".py",   // Python
    ".java", // Java
    ".cpp", ".c", ".h",   // C and C++
    ".php",  // PHP
    ".html", // HTML
    ".txt",
];

pub fn has_allowed_extension(name: &str) -> bool {
    EXTENSION_ALLOWLIST.iter().any(|ext| name.ends_with(ext))
}

/// Find every annotation in `content`, in line order.
pub fn scan_content(content: &str, path: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (index, line) in content.split('\n').enumerate() {
        for found in match_line(line) {
            findings.push(Finding::new(path, index + 1, found.full_text.trim()));
        }
    }
    findings
}

/// Read `handle` and scan it. A read failure only concerns this file.
pub fn scan_file(handle: &dyn FileHandle, path: &str) -> Result<Vec<Finding>, ScanWarning> {
    let content = handle
        .read_text()
        .map_err(|source| ScanWarning::FileRead { path: path.to_string(), source })?;
    let findings = scan_content(&content, path);
    debug!("Scanned {} ({} finding(s))", path, findings.len());
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Text(&'static str);

    impl FileHandle for Text {
        fn read_text(&self) -> io::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Unreadable;

    impl FileHandle for Unreadable {
        fn read_text(&self) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn allowlist_is_case_sensitive_suffix_match() {
        assert!(has_allowed_extension("main.c"));
        assert!(has_allowed_extension("app.jsx"));
        assert!(has_allowed_extension("notes.txt"));
        assert!(!has_allowed_extension("tool.exe"));
        assert!(!has_allowed_extension("README.TXT"));
        assert!(!has_allowed_extension("lib.rs"));
    }

    #[test]
    fn line_numbers_are_one_based_and_text_is_trimmed() {
        let content = "first\n  // TODO: second line  \r\nthird\n# BUG: fourth";
        let findings = scan_content(content, "src/app.py");
        assert_eq!(
            findings,
            vec![
                Finding::new("src/app.py", 2, "// TODO: second line"),
                Finding::new("src/app.py", 4, "# BUG: fourth"),
            ]
        );
    }

    #[test]
    fn crlf_lines_match_like_lf_lines() {
        assert!(scan_content("// TODO:\r\nx\r\n", "a.js").is_empty());
        assert_eq!(
            scan_content("x\r\n// FIXME: wrap\r\n", "a.js"),
            scan_content("x\n// FIXME: wrap\n", "a.js"),
        );
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert!(scan_content("", "empty.txt").is_empty());
    }

    #[test]
    fn scan_file_reads_through_handle() {
        let findings = scan_file(&Text("<!-- FIXME: alt text -->"), "index.html").unwrap();
        assert_eq!(findings, vec![Finding::new("index.html", 1, "<!-- FIXME: alt text -->")]);
    }

    #[test]
    fn unreadable_file_is_a_warning() {
        let err = scan_file(&Unreadable, "secret.txt").unwrap_err();
        assert!(matches!(err, ScanWarning::FileRead { .. }));
        assert_eq!(err.path(), "secret.txt");
    }
}
