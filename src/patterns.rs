//! Comment patterns for TODO, FIXME and BUG annotations.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::model::{CommentSyntax, Keyword};

/// One compiled entry of the pattern table.
#[derive(Debug)]
pub struct CommentPattern {
    pub keyword: Keyword,
    pub syntax: CommentSyntax,
    regex: Regex,
}

/// A single match on a line: the whole matched text, keyword and comment
/// delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentMatch {
    pub full_text: String,
    pub keyword: Keyword,
    pub syntax: CommentSyntax,
}

static PATTERN_TABLE: OnceLock<Vec<CommentPattern>> = OnceLock::new();

/// The 12 patterns, keyword-major and syntax-minor.
pub fn pattern_table() -> &'static [CommentPattern] {
    PATTERN_TABLE.get_or_init(|| {
        let mut table = Vec::with_capacity(Keyword::ALL.len() * CommentSyntax::ALL.len());
        for keyword in Keyword::ALL {
            for syntax in CommentSyntax::ALL {
                let source = pattern_source(keyword, syntax);
                let regex = RegexBuilder::new(&source)
                    .case_insensitive(true)
                    .crlf(true)
                    .build()
                    .expect("comment patterns are valid regexes");
                table.push(CommentPattern { keyword, syntax, regex });
            }
        }
        table
    })
}

fn pattern_source(keyword: Keyword, syntax: CommentSyntax) -> String {
    let keyword = keyword.as_str();
    match syntax {
        CommentSyntax::Line => format!(r"//\s*{keyword}[:\s](.+)"),
        CommentSyntax::Block => format!(r"/\*\s*{keyword}[:\s](.+?)\*/"),
        CommentSyntax::Hash => format!(r"#\s*{keyword}[:\s](.+)"),
        CommentSyntax::Html => format!(r"<!--\s*{keyword}[:\s](.+?)-->"),
    }
}

/// Apply every pattern to `line`, collecting all non-overlapping matches of
/// each pattern in table order. Matches of different patterns may overlap.
pub fn match_line(line: &str) -> Vec<CommentMatch> {
    let mut matches = Vec::new();
    for pattern in pattern_table() {
        for found in pattern.regex.find_iter(line) {
            matches.push(CommentMatch {
                full_text: found.as_str().to_string(),
                keyword: pattern.keyword,
                syntax: pattern.syntax,
            });
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        match_line(line).into_iter().map(|m| m.full_text).collect()
    }

    #[test]
    fn table_has_twelve_patterns() {
        assert_eq!(pattern_table().len(), 12);
        assert_eq!(pattern_table()[0].keyword, Keyword::Todo);
        assert_eq!(pattern_table()[0].syntax, CommentSyntax::Line);
        assert_eq!(pattern_table()[11].keyword, Keyword::Bug);
        assert_eq!(pattern_table()[11].syntax, CommentSyntax::Html);
    }

    #[test]
    fn line_comment_todo() {
        let matches = match_line("    let x = 1; // TODO: fix this");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full_text, "// TODO: fix this");
        assert_eq!(matches[0].syntax, CommentSyntax::Line);
    }

    #[test]
    fn block_comment_does_not_match_as_line_comment() {
        let matches = match_line("/* TODO: refactor */ code here");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].full_text, "/* TODO: refactor */");
        assert_eq!(matches[0].syntax, CommentSyntax::Block);
    }

    #[test]
    fn unclosed_block_comment_is_ignored() {
        assert!(match_line("/* TODO: spans several lines").is_empty());
    }

    #[test]
    fn hash_and_html_comments() {
        assert_eq!(texts("x = 1  # FIXME: handle None"), vec!["# FIXME: handle None"]);
        assert_eq!(texts("<p><!-- BUG: wrong label --></p>"), vec!["<!-- BUG: wrong label -->"]);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(texts("// todo: lower case"), vec!["// todo: lower case"]);
        assert_eq!(texts("# Fixme tidy up"), vec!["# Fixme tidy up"]);
    }

    #[test]
    fn keyword_needs_separator() {
        assert!(match_line("// TODOS are fine").is_empty());
        assert!(match_line("// TODO").is_empty());
    }

    #[test]
    fn lines_without_keywords_yield_nothing() {
        assert!(match_line("fn main() { println!(\"hi\"); }").is_empty());
        assert!(match_line("").is_empty());
    }

    #[test]
    fn several_block_comments_on_one_line() {
        assert_eq!(texts("/* TODO: a */ x /* TODO: b */"), vec!["/* TODO: a */", "/* TODO: b */"]);
    }

    #[test]
    fn overlapping_patterns_are_not_deduplicated() {
        // The hash pattern also matches inside the line comment.
        let matches = match_line("// TODO: see #BUG: 12");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].full_text, "// TODO: see #BUG: 12");
        assert_eq!(matches[1].full_text, "#BUG: 12");
    }
}
