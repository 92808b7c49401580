pub mod apps;
pub mod config_cmd;
pub mod copy;
pub mod panel;
pub mod scan;
pub mod versions;

pub use apps::execute_apps;
pub use config_cmd::execute_config;
pub use copy::execute_copy;
pub use panel::execute_panel;
pub use scan::execute_scan;
pub use versions::{execute_badges, execute_detect};
