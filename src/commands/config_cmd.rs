use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::config::{Config, config_file_path, ensure_config_file};
use crate::error::AppError;
use crate::path::display_path;

pub struct ConfigOptions {
    pub show_path: bool,
    pub edit: bool,
    pub add_exclude: Option<String>,
}

pub fn execute_config(options: ConfigOptions) -> Result<(), AppError> {
    let summary_only = !options.show_path && options.add_exclude.is_none() && !options.edit;

    if options.show_path || summary_only {
        println!("Configuration file: {}", display_path(&config_file_path()?));
    }
    if let Some(pattern) = &options.add_exclude {
        add_exclude(pattern)?;
    }
    if options.edit {
        open_editor(&ensure_config_file()?)?;
    }
    if summary_only {
        print_excludes(&Config::load()?);
    }

    Ok(())
}

/// Saves `pattern` only if the whole exclude list still compiles.
fn add_exclude(pattern: &str) -> Result<(), AppError> {
    let mut config = Config::load()?;
    config.append_exclude(pattern.to_string());
    config.compile_excludes()?;
    config.save()?;
    info!("Exclude list is now {:?}", config.exclude);
    println!("Added exclude pattern '{}'.", pattern);
    Ok(())
}

fn print_excludes(config: &Config) {
    if config.exclude.is_empty() {
        println!("No exclude patterns.");
        return;
    }
    println!("Exclude patterns (matched against paths inside the scanned directory):");
    for pattern in &config.exclude {
        println!("  - {}", pattern);
    }
}

fn open_editor(path: &Path) -> Result<(), AppError> {
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| "nano".to_string());

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|err| AppError::Editor(format!("{editor}: {err}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Editor(format!("{editor} exited with status {status}")))
    }
}
