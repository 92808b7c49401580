use std::path::{Path, PathBuf};

use dirs_next as dirs;

/// Replace the home directory prefix with `~` to make output easier to read.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        let mut display = PathBuf::from("~");
        display.push(stripped);
        return display.display().to_string();
    }

    path.display().to_string()
}

/// The directory a scan starts from, if it is known without asking.
///
/// `--current` wins over an explicit path; with neither the user is
/// prompted.
pub fn resolve_scan_root(explicit: Option<&Path>, current: bool) -> Option<PathBuf> {
    if current {
        Some(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    } else {
        explicit.map(Path::to_path_buf)
    }
}
