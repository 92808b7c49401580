//! Tool, OS and browser versions attached to a task.
//!
//! Entries are edited in a [`VersionEntries`] list and stored on the task as
//! a JSON array of `{"tool": ..., "version": ...}` objects.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Python,
    Chrome,
    Safari,
    Macos,
    Windows,
    Screen,
}

impl Tool {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Python => "python",
            Tool::Chrome => "chrome",
            Tool::Safari => "safari",
            Tool::Macos => "macos",
            Tool::Windows => "windows",
            Tool::Screen => "screen",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Python => "⌨️ Python",
            Tool::Chrome => "🌐 Chrome",
            Tool::Safari => "🌐 Safari",
            Tool::Macos => "📀 MacOS",
            Tool::Windows => "📀 Windows",
            Tool::Screen => "🖥️ Screen",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub tool: Tool,
    pub version: String,
}

impl VersionInfo {
    pub fn new(tool: Tool, version: impl Into<String>) -> Self {
        Self { tool, version: version.into() }
    }

    pub fn badge(&self) -> String {
        format!("{} {}", self.tool.display_name(), self.version)
    }
}

/// Screen resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Screen {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidScreen(s.to_string());
        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        Ok(Screen {
            width: width.trim().parse().map_err(|_| invalid())?,
            height: height.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

struct AgentPatterns {
    windows: Regex,
    macos: Regex,
    chrome: Regex,
    safari: Regex,
}

static AGENT_PATTERNS: OnceLock<AgentPatterns> = OnceLock::new();

fn agent_patterns() -> &'static AgentPatterns {
    AGENT_PATTERNS.get_or_init(|| AgentPatterns {
        windows: Regex::new(r"Windows NT ([\d.]+)").expect("valid regex"),
        macos: Regex::new(r"Mac OS X ([\d_]+)").expect("valid regex"),
        chrome: Regex::new(r"Chrome/([\d.]+)").expect("valid regex"),
        safari: Regex::new(r"Version/([\d.]+)").expect("valid regex"),
    })
}

fn capture(regex: &Regex, haystack: &str) -> Option<String> {
    regex.captures(haystack).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_string())
}

/// Pick the OS and browser versions out of a user-agent string, then add the
/// screen size when known.
///
/// Windows wins over macOS and Chrome wins over Safari, since Chrome agents
/// also advertise `Safari`.
pub fn detect_versions(user_agent: &str, screen: Option<Screen>) -> Vec<VersionInfo> {
    let patterns = agent_patterns();
    let mut detected = Vec::new();

    if user_agent.contains("Windows NT") {
        if let Some(version) = capture(&patterns.windows, user_agent) {
            detected.push(VersionInfo::new(Tool::Windows, version));
        }
    } else if user_agent.contains("Mac OS X")
        && let Some(version) = capture(&patterns.macos, user_agent)
    {
        detected.push(VersionInfo::new(Tool::Macos, version));
    }

    if user_agent.contains("Chrome") {
        if let Some(version) = capture(&patterns.chrome, user_agent) {
            detected.push(VersionInfo::new(Tool::Chrome, version));
        }
    } else if user_agent.contains("Safari")
        && let Some(version) = capture(&patterns.safari, user_agent)
    {
        detected.push(VersionInfo::new(Tool::Safari, version));
    }

    if let Some(screen) = screen {
        detected.push(VersionInfo::new(Tool::Screen, screen.to_string()));
    }

    detected
}

/// Identifies an entry within one [`VersionEntries`] list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u32);

/// A row being edited; either field may still be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub id: EntryId,
    pub tool: Option<Tool>,
    pub version: String,
}

#[derive(Debug, Clone, Default)]
pub struct VersionEntries {
    entries: Vec<VersionEntry>,
    next_id: u32,
}

impl VersionEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tool: Option<Tool>, version: impl Into<String>) -> EntryId {
        self.next_id += 1;
        let id = EntryId(self.next_id);
        self.entries.push(VersionEntry { id, tool, version: version.into() });
        id
    }

    pub fn add_empty(&mut self) -> EntryId {
        self.add(None, String::new())
    }

    /// Returns `false` when no entry has this id.
    pub fn update(&mut self, id: EntryId, tool: Option<Tool>, version: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.tool = tool;
                entry.version = version.into();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Drop every entry and start over from `detected`, e.g. after
    /// auto-detection. Ids restart as well.
    pub fn replace_with(&mut self, detected: Vec<VersionInfo>) {
        self.entries.clear();
        self.next_id = 0;
        for info in detected {
            self.add(Some(info.tool), info.version);
        }
    }

    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }

    /// Entries with both a tool and a non-blank version, versions trimmed.
    pub fn collect(&self) -> Vec<VersionInfo> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let tool = entry.tool?;
                let version = entry.version.trim();
                (!version.is_empty()).then(|| VersionInfo::new(tool, version))
            })
            .collect()
    }

    /// The value stored on the task.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(&self.collect())?)
    }
}

pub fn parse_version_info(json: &str) -> Result<Vec<VersionInfo>, AppError> {
    Ok(serde_json::from_str(json)?)
}

pub fn badges(versions: &[VersionInfo]) -> Vec<String> {
    versions.iter().map(VersionInfo::badge).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_ON_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
        (KHTML, like Gecko) Chrome/120.0.6099.109 Safari/537.36";
    const SAFARI_ON_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
        (KHTML, like Gecko) Version/17.2 Safari/605.1.15";

    #[test]
    fn detects_windows_and_chrome() {
        let detected = detect_versions(CHROME_ON_WINDOWS, Some(Screen { width: 1920, height: 1080 }));
        assert_eq!(
            detected,
            vec![
                VersionInfo::new(Tool::Windows, "10.0"),
                VersionInfo::new(Tool::Chrome, "120.0.6099.109"),
                VersionInfo::new(Tool::Screen, "1920x1080"),
            ]
        );
    }

    #[test]
    fn detects_macos_and_safari() {
        let detected = detect_versions(SAFARI_ON_MAC, None);
        assert_eq!(
            detected,
            vec![VersionInfo::new(Tool::Macos, "10_15_7"), VersionInfo::new(Tool::Safari, "17.2")]
        );
    }

    #[test]
    fn unknown_agent_only_reports_screen() {
        let detected = detect_versions("curl/8.4.0", Some("800x600".parse().unwrap()));
        assert_eq!(detected, vec![VersionInfo::new(Tool::Screen, "800x600")]);
    }

    #[test]
    fn screen_parsing() {
        assert_eq!("1280X720".parse::<Screen>().unwrap(), Screen { width: 1280, height: 720 });
        assert!(matches!("wide".parse::<Screen>(), Err(AppError::InvalidScreen(_))));
        assert!("12x".parse::<Screen>().is_err());
    }

    #[test]
    fn json_keeps_complete_entries_only() {
        let mut entries = VersionEntries::new();
        entries.add(Some(Tool::Python), " 3.12 ");
        entries.add_empty();
        entries.add(Some(Tool::Chrome), "   ");
        entries.add(None, "1.0");
        assert_eq!(entries.to_json().unwrap(), r#"[{"tool":"python","version":"3.12"}]"#);
    }

    #[test]
    fn ids_are_per_list() {
        let mut first = VersionEntries::new();
        let mut second = VersionEntries::new();
        let a = first.add_empty();
        let b = second.add_empty();
        assert_eq!(a, b);

        let c = first.add(Some(Tool::Screen), "1x1");
        assert_ne!(a, c);
        assert!(first.remove(a));
        assert!(!first.remove(a));
        assert_eq!(first.entries().len(), 1);
        assert_eq!(first.entries()[0].id, c);
    }

    #[test]
    fn update_changes_one_entry() {
        let mut entries = VersionEntries::new();
        let id = entries.add_empty();
        assert!(entries.update(id, Some(Tool::Macos), "14.2"));
        assert_eq!(entries.collect(), vec![VersionInfo::new(Tool::Macos, "14.2")]);

        let mut other = VersionEntries::new();
        assert!(!other.update(id, Some(Tool::Macos), "14.2"));
    }

    #[test]
    fn replace_with_discards_previous_entries() {
        let mut entries = VersionEntries::new();
        entries.add(Some(Tool::Python), "3.11");
        entries.replace_with(detect_versions(SAFARI_ON_MAC, None));
        assert_eq!(entries.entries().len(), 2);
        assert_eq!(entries.entries()[0].tool, Some(Tool::Macos));
    }

    #[test]
    fn badges_from_json() {
        let versions =
            parse_version_info(r#"[{"tool":"python","version":"3.12"},{"tool":"screen","version":"800x600"}]"#)
                .unwrap();
        assert_eq!(badges(&versions), vec!["⌨️ Python 3.12", "🖥️ Screen 800x600"]);
        assert!(parse_version_info(r#"[{"tool":"emacs","version":"29"}]"#).is_err());
    }
}
