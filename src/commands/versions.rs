use crate::error::AppError;
use crate::versions::{Screen, VersionEntries, badges, detect_versions, parse_version_info};

pub struct DetectOptions {
    pub user_agent: String,
    pub screen: Option<Screen>,
}

/// Print the version-info value a task would store.
pub fn execute_detect(options: DetectOptions) -> Result<(), AppError> {
    let mut entries = VersionEntries::new();
    entries.replace_with(detect_versions(&options.user_agent, options.screen));

    println!("{}", entries.to_json()?);
    Ok(())
}

pub fn execute_badges(json: &str) -> Result<(), AppError> {
    let versions = parse_version_info(json)?;
    for badge in badges(&versions) {
        println!("{badge}");
    }
    Ok(())
}
