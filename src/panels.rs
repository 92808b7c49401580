//! Collapsible panels of the task form and their remembered state.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::state_file_path;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Panel {
    /// The "new task" form.
    Dropdown,
    /// Extra task options (app, snippet, branch, versions).
    Options,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Dropdown, Panel::Options];

    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "dropdown" => Some(Panel::Dropdown),
            "options" => Some(Panel::Options),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Dropdown => "dropdown",
            Panel::Options => "options",
        }
    }

    /// Key under which the collapsed flag is stored.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Panel::Dropdown => "dropdownCollapsed",
            Panel::Options => "optionsCollapsed",
        }
    }
}

impl std::str::FromStr for Panel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Panel::from_name(s).ok_or_else(|| format!("Unknown panel '{s}'"))
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// String key-value store persisted as TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UiState {
    values: BTreeMap<String, String>,
}

impl UiState {
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(&state_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(UiState::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf, AppError> {
        let path = state_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Whether `panel` starts collapsed.
    ///
    /// The dropdown is open unless it was explicitly collapsed; the options
    /// panel is collapsed unless it was explicitly opened.
    pub fn is_collapsed(&self, panel: Panel) -> bool {
        let flag = self.get(panel.storage_key());
        match panel {
            Panel::Dropdown => flag == Some("true"),
            Panel::Options => flag.is_none() || flag == Some("true"),
        }
    }

    /// Flip `panel` and remember the new state. Returns whether it is now
    /// collapsed.
    pub fn toggle(&mut self, panel: Panel) -> bool {
        let collapsed = !self.is_collapsed(panel);
        self.set(panel.storage_key(), collapsed.to_string());
        collapsed
    }
}
