use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::access::{PathPicker, PromptPicker};
use crate::config::Config;
use crate::error::AppError;
use crate::path::display_path;
use crate::presenter::{ResultsView, TaskForm};
use crate::session::ScanSession;
use crate::versions::parse_version_info;
use crate::walker::Walker;

pub struct ScanOptions {
    /// `None` prompts for a directory.
    pub root: Option<PathBuf>,
    pub json: bool,
    /// 1-based number of the finding to turn into a task.
    pub import: Option<usize>,
    /// App URI stored on the imported task.
    pub app: Option<String>,
    /// Version-info JSON stored on the imported task.
    pub versions: Option<String>,
}

pub fn execute_scan(options: ScanOptions) -> Result<ScanSession, AppError> {
    let config = Config::load()?;
    let mut session = ScanSession::new(Walker::new(config.compile_excludes()?));

    match &options.root {
        Some(root) => {
            info!("Scanning {}", display_path(root));
            let spinner = scan_spinner(root);
            let result = session.run_scan(&PathPicker::new(root));
            spinner.finish_and_clear();
            result?;
        }
        None => {
            session.run_scan(&PromptPicker)?;
        }
    }

    if session.was_cancelled() {
        println!("{}", cancelled_message(&options));
        return Ok(session);
    }

    if let Some(number) = options.import {
        print_import(&session, number, &options)?;
    } else if options.json {
        println!("{}", serde_json::to_string_pretty(session.findings())?);
    } else {
        print!("{}", ResultsView::from_findings(session.findings()));
    }

    print_warnings(&session);
    Ok(session)
}

/// With `--json` a cancelled scan prints an empty list.
fn cancelled_message(options: &ScanOptions) -> &'static str {
    if options.json && options.import.is_none() { "[]" } else { "Scan cancelled." }
}

fn scan_spinner(root: &Path) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Scanning {}", display_path(root)));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_import(
    session: &ScanSession,
    number: usize,
    options: &ScanOptions,
) -> Result<(), AppError> {
    let mut form = TaskForm::default();
    let imported =
        number.checked_sub(1).is_some_and(|index| form.import(session.findings(), index));
    if !imported {
        info!("No comment number {}; the task form is left empty", number);
    }

    if let Some(uri) = &options.app
        && form.select_app(uri).is_none()
    {
        warn!("'{}' is not one of the known apps", uri);
    }
    if let Some(json) = &options.versions {
        parse_version_info(json)?;
        form.version_info = Some(json.clone());
    }

    println!("{}", serde_json::to_string_pretty(&form)?);
    Ok(())
}

/// Each skipped path was already logged by the walker.
fn print_warnings(session: &ScanSession) {
    let skipped = session.warnings().len();
    if skipped > 0 {
        eprintln!("Skipped {} unreadable path(s).", skipped);
    }
}
