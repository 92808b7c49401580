use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::AppError;

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Snippet,
    Branch,
}

impl CopyTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyTarget::Snippet => "snippet",
            CopyTarget::Branch => "branch",
        }
    }
}

impl std::str::FromStr for CopyTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snippet" => Ok(CopyTarget::Snippet),
            "branch" => Ok(CopyTarget::Branch),
            _ => Err(format!("Unknown copy target '{s}' (expected snippet or branch)")),
        }
    }
}

/// Copy a code snippet or a branch name.
///
/// Snippets go in verbatim; branch names are trimmed.
pub fn copy(clipboard: &dyn Clipboard, target: CopyTarget, text: &str) -> Result<(), AppError> {
    let text = match target {
        CopyTarget::Snippet => text,
        CopyTarget::Branch => text.trim(),
    };
    debug!("Copying {} ({} bytes)", target.as_str(), text.len());
    clipboard.write_text(text)
}

/// The platform clipboard, reached through its command-line utility.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("clip", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), AppError> {
        write_via(CANDIDATES, text)
    }
}

/// Pipe `text` into the first candidate that takes all of it and exits
/// cleanly.
fn write_via(candidates: &[(&str, &[&str])], text: &str) -> Result<(), AppError> {
    let mut last_error = None;
    for (program, args) in candidates {
        match pipe_into(program, args, text) {
            Ok(()) => return Ok(()),
            Err(reason) => {
                debug!("{}", reason);
                last_error = Some(reason);
            }
        }
    }

    Err(AppError::Clipboard(last_error.unwrap_or_else(|| "no clipboard utility found".to_string())))
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<(), String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| format!("{program}: {err}"))?;

    // Dropping stdin closes the pipe so the child sees end of input.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait().map_err(|err| format!("{program}: {err}"))?;

    written.map_err(|err| format!("{program}: {err}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{program} exited with status {status}"))
    }
}
