use tracing::info;

use crate::access::DirectoryPicker;
use crate::error::{AppError, ScanWarning};
use crate::model::Finding;
use crate::walker::Walker;

/// One scan at a time: picks a directory, walks it, keeps the results until
/// the next scan replaces them.
#[derive(Debug, Default)]
pub struct ScanSession {
    walker: Walker,
    findings: Vec<Finding>,
    warnings: Vec<ScanWarning>,
    cancelled: bool,
}

impl ScanSession {
    pub fn new(walker: Walker) -> Self {
        Self { walker, ..Self::default() }
    }

    /// Run a scan from whatever directory `picker` yields.
    ///
    /// Results of a previous scan are dropped first, so a cancelled pick
    /// leaves the session empty. Only a picker that cannot work at all (or
    /// a path that is not a directory) is an error.
    pub fn run_scan(&mut self, picker: &dyn DirectoryPicker) -> Result<&[Finding], AppError> {
        self.findings.clear();
        self.warnings.clear();
        self.cancelled = false;

        let Some(root) = picker.pick_directory()? else {
            info!("Directory selection cancelled");
            self.cancelled = true;
            return Ok(&self.findings);
        };

        let outcome = self.walker.walk(root.as_ref(), "");
        info!(
            "Scan finished with {} finding(s) and {} warning(s)",
            outcome.findings.len(),
            outcome.warnings.len()
        );
        self.findings = outcome.findings;
        self.warnings = outcome.warnings;
        Ok(&self.findings)
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }
}
