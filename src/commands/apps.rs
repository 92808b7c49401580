use crate::apps::{AVAILABLE_APPS, app_by_uri, open_app};
use crate::error::AppError;

pub struct AppsOptions {
    pub open: Option<String>,
}

pub fn execute_apps(options: AppsOptions) -> Result<(), AppError> {
    let Some(uri) = options.open else {
        println!("Available apps:");
        for app in &AVAILABLE_APPS {
            println!("- {:<8} {:<20} {}", app.name, app.uri, app.icon);
        }
        return Ok(());
    };

    match app_by_uri(&uri) {
        Some(app) => println!("Opening {}...", app.name),
        None => println!("Opening {}...", uri),
    }
    open_app(&uri)
}
