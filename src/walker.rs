use globset::GlobSet;
use tracing::{debug, warn};

use crate::access::{DirectoryHandle, EntryHandle};
use crate::error::ScanWarning;
use crate::model::WalkOutcome;
use crate::scanner::{has_allowed_extension, scan_file};

/// Depth-first walk over a directory handle, scanning allowlisted files.
#[derive(Debug, Default)]
pub struct Walker {
    exclude: Option<GlobSet>,
}

impl Walker {
    pub fn new(exclude: Option<GlobSet>) -> Self {
        Self { exclude }
    }

    /// Walk `dir`, whose display path is `prefix` (empty for the scan root).
    ///
    /// Unreadable files and directories end up in `warnings`; the rest of the
    /// tree is still walked.
    pub fn walk(&self, dir: &dyn DirectoryHandle, prefix: &str) -> WalkOutcome {
        let mut outcome = WalkOutcome::new();

        let entries = match dir.entries() {
            Ok(entries) => entries,
            Err(source) => {
                let path = if prefix.is_empty() { ".".to_string() } else { prefix.to_string() };
                warn!("Skipping directory {}: {}", path, source);
                outcome.warnings.push(ScanWarning::DirectoryRead { path, source });
                return outcome;
            }
        };

        for entry in entries {
            let entry_path = join_display_path(prefix, &entry.name);
            if self.is_excluded(&entry_path) {
                debug!("Excluded {}", entry_path);
                continue;
            }

            match &entry.handle {
                EntryHandle::File(file) => {
                    if !has_allowed_extension(&entry.name) {
                        continue;
                    }
                    match scan_file(file.as_ref(), &entry_path) {
                        Ok(mut findings) => outcome.findings.append(&mut findings),
                        Err(warning) => {
                            warn!("Skipping file: {}", warning);
                            outcome.warnings.push(warning);
                        }
                    }
                }
                EntryHandle::Directory(subdir) => {
                    outcome.extend(self.walk(subdir.as_ref(), &entry_path));
                }
                EntryHandle::Other => {}
            }
        }

        outcome
    }

    fn is_excluded(&self, display_path: &str) -> bool {
        self.exclude.as_ref().is_some_and(|set| set.is_match(display_path))
    }
}

pub fn join_display_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() { name.to_string() } else { format!("{prefix}/{name}") }
}
