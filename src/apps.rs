use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::debug;

use crate::error::AppError;

/// A desktop application a task can be opened in, through its URI scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaunchApp {
    pub name: &'static str,
    pub uri: &'static str,
    pub icon: &'static str,
}

pub const AVAILABLE_APPS: [LaunchApp; 5] = [
    LaunchApp { name: "VSCode", uri: "vscode://", icon: "vscode.png" },
    LaunchApp { name: "Sketch", uri: "sketch://", icon: "sketch.png" },
    LaunchApp { name: "Xcode", uri: "xcode://", icon: "xcode.png" },
    LaunchApp { name: "GitHub", uri: "x-github-client://", icon: "github.png" },
    LaunchApp { name: "Figma", uri: "figma://", icon: "figma.png" },
];

pub fn app_by_uri(uri: &str) -> Option<&'static LaunchApp> {
    AVAILABLE_APPS.iter().find(|app| app.uri == uri)
}

/// Hand `uri` to the platform opener. An empty URI does nothing.
pub fn open_app(uri: &str) -> Result<(), AppError> {
    if uri.is_empty() {
        return Ok(());
    }

    let mut command = opener_command(uri);
    debug!("Opening {} with {:?}", uri, command);
    let status = command
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|err| AppError::Launcher { uri: uri.to_string(), reason: err.to_string() })?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Launcher {
            uri: uri.to_string(),
            reason: format!("opener exited with status {status}"),
        })
    }
}

fn opener_command(uri: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(uri);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", uri]);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(uri);
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_uri() {
        assert_eq!(app_by_uri("figma://").map(|app| app.name), Some("Figma"));
        assert_eq!(app_by_uri("x-github-client://").map(|app| app.icon), Some("github.png"));
        assert!(app_by_uri("figma").is_none());
    }

    #[test]
    fn empty_uri_is_a_no_op() {
        assert!(open_app("").is_ok());
    }
}
