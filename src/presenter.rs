//! Turning findings into something to show, and into task drafts.

use std::fmt;

use serde::Serialize;

use crate::apps::{LaunchApp, app_by_uri};
use crate::model::Finding;

pub const EMPTY_STATE: &str = "Nothing found in this project.";

/// Everything the results list shows, computed from the findings alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub count: usize,
    pub items: Vec<ResultItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// 1-based, the number a user passes to import this item.
    pub number: usize,
    pub comment: String,
    pub location: String,
}

impl ResultsView {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let items = findings
            .iter()
            .enumerate()
            .map(|(index, finding)| ResultItem {
                number: index + 1,
                comment: finding.comment_text.clone(),
                location: finding.location(),
            })
            .collect();
        Self { count: findings.len(), items }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.count == 0 { Some(EMPTY_STATE) } else { None }
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} comment(s)", self.count)?;
        if let Some(message) = self.empty_message() {
            return writeln!(f, "{message}");
        }
        for item in &self.items {
            writeln!(f, "  [{}] {}", item.number, item.comment)?;
            writeln!(f, "      {}", item.location)?;
        }
        Ok(())
    }
}

/// Title and description derived from one finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedTask {
    pub title: String,
    pub description: String,
}

/// Map the finding at `index` (0-based) to task fields. Out of range gives
/// `None`.
pub fn import_finding(findings: &[Finding], index: usize) -> Option<ImportedTask> {
    let finding = findings.get(index)?;
    Some(ImportedTask {
        title: finding.comment_text.clone(),
        description: format!("In file {} at line {}", finding.file_path, finding.line_number),
    })
}

/// The fields a new task is created from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_uri: Option<String>,
    /// JSON array of `{tool, version}` objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_info: Option<String>,
}

impl TaskForm {
    /// Fill title and description from a finding. Returns `false`, leaving
    /// the form as it was, when `index` is out of range.
    pub fn import(&mut self, findings: &[Finding], index: usize) -> bool {
        match import_finding(findings, index) {
            Some(task) => {
                self.title = task.title;
                self.description = task.description;
                true
            }
            None => false,
        }
    }

    /// Remember which app the task opens in.
    pub fn select_app(&mut self, uri: &str) -> Option<&'static LaunchApp> {
        self.app_uri = Some(uri.to_string());
        app_by_uri(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findings() -> Vec<Finding> {
        vec![
            Finding::new("src/app.js", 4, "// TODO: cache results"),
            Finding::new("lib/util.py", 10, "# BUG: off by one"),
        ]
    }

    #[test]
    fn view_count_matches_findings() {
        let view = ResultsView::from_findings(&findings());
        assert_eq!(view.count, 2);
        assert_eq!(view.items[1].number, 2);
        assert_eq!(view.items[1].location, "lib/util.py:10");
        assert!(view.empty_message().is_none());

        let rendered = view.to_string();
        assert!(rendered.starts_with("Found 2 comment(s)\n"));
        assert!(rendered.contains("  [1] // TODO: cache results\n      src/app.js:4\n"));
    }

    #[test]
    fn empty_view_shows_message() {
        let view = ResultsView::from_findings(&[]);
        assert_eq!(view.count, 0);
        assert_eq!(view.to_string(), format!("Found 0 comment(s)\n{EMPTY_STATE}\n"));
    }

    #[test]
    fn import_maps_title_and_description() {
        let task = import_finding(&findings(), 1).unwrap();
        assert_eq!(task.title, "# BUG: off by one");
        assert_eq!(task.description, "In file lib/util.py at line 10");
    }

    #[test]
    fn import_out_of_range_leaves_form_untouched() {
        let mut form = TaskForm { title: "keep".into(), ..TaskForm::default() };
        assert!(!form.import(&[], 0));
        assert!(!form.import(&findings(), 2));
        assert_eq!(form.title, "keep");
        assert!(form.description.is_empty());

        assert!(form.import(&findings(), 0));
        assert_eq!(form.title, "// TODO: cache results");
    }

    #[test]
    fn select_app_records_uri() {
        let mut form = TaskForm::default();
        let app = form.select_app("vscode://").unwrap();
        assert_eq!(app.name, "VSCode");
        assert_eq!(form.app_uri.as_deref(), Some("vscode://"));
        assert!(form.select_app("unknown://").is_none());
    }
}
