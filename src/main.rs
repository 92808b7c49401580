use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use devault::clipboard::CopyTarget;
use devault::commands::{
    apps::AppsOptions, config_cmd::ConfigOptions, copy::CopyOptions, panel::PanelOptions,
    scan::ScanOptions, versions::DetectOptions,
};
use devault::commands::{
    execute_apps, execute_badges, execute_config, execute_copy, execute_detect, execute_panel,
    execute_scan,
};
use devault::error::AppError;
use devault::panels::Panel;
use devault::path::resolve_scan_root;
use devault::versions::Screen;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scan(args) => {
            let options = ScanOptions {
                root: resolve_scan_root(args.path.as_deref(), args.current),
                json: args.json,
                import: args.import,
                app: args.app,
                versions: args.versions,
            };
            execute_scan(options)?;
        }
        Commands::Panel(args) => {
            execute_panel(PanelOptions { panel: args.panel, toggle: args.toggle })?;
        }
        Commands::Copy(args) => {
            execute_copy(CopyOptions { target: args.target, text: args.text })?;
        }
        Commands::Versions(args) => match args.command {
            VersionsCommand::Detect { user_agent, screen } => {
                execute_detect(DetectOptions { user_agent, screen })?;
            }
            VersionsCommand::Badges { json } => execute_badges(&json)?,
        },
        Commands::Apps(args) => {
            execute_apps(AppsOptions { open: args.open })?;
        }
        Commands::Config(args) => {
            let options = ConfigOptions {
                show_path: args.path,
                edit: args.edit,
                add_exclude: args.add_exclude,
            };
            execute_config(options)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "devault=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[derive(Parser)]
#[command(name = "devault", version, about = "Turn TODO comments into tasks and keep task details at hand.")]
struct Cli {
    /// Log what devault is doing to stderr.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find TODO, FIXME and BUG comments in a project directory.
    #[command(visible_alias = "sc")]
    Scan(ScanArgs),
    /// Show or toggle the collapsed state of the task form panels.
    Panel(PanelArgs),
    /// Copy a code snippet or a branch name to the clipboard.
    Copy(CopyArgs),
    /// Record tool, OS and browser versions for a task.
    Versions(VersionsArgs),
    /// List the apps a task can be opened in, or open one.
    Apps(AppsArgs),
    /// Manage devault configuration (exclusions, etc.).
    #[command(visible_alias = "cfg")]
    Config(ConfigArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Print findings as JSON.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Fill a task form from the finding with this number and print it.
    #[arg(long = "import", value_name = "N")]
    import: Option<usize>,

    /// App URI to attach to the imported task (see `devault apps`).
    #[arg(long = "app", value_name = "URI", requires = "import")]
    app: Option<String>,

    /// Version info to attach to the imported task, as printed by `devault versions detect`.
    #[arg(long = "versions", value_name = "JSON", requires = "import")]
    versions: Option<String>,

    /// Scan the current directory.
    #[arg(short = 'c', long = "current", action = ArgAction::SetTrue, conflicts_with = "path")]
    current: bool,

    /// Directory to scan (prompted for when omitted).
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

#[derive(Args)]
struct PanelArgs {
    /// Panel to act on: dropdown or options (defaults to both).
    #[arg(value_name = "PANEL")]
    panel: Option<Panel>,

    /// Collapse the panel if it is expanded, expand it otherwise.
    #[arg(long = "toggle", action = ArgAction::SetTrue)]
    toggle: bool,
}

#[derive(Args)]
struct CopyArgs {
    /// What is being copied: snippet or branch.
    #[arg(value_name = "WHAT")]
    target: CopyTarget,

    /// Text to copy (read from stdin when omitted).
    #[arg(value_name = "TEXT")]
    text: Option<String>,
}

#[derive(Args)]
struct VersionsArgs {
    #[command(subcommand)]
    command: VersionsCommand,
}

#[derive(Subcommand)]
enum VersionsCommand {
    /// Detect OS and browser versions from a user-agent string.
    Detect {
        /// Browser user-agent string.
        #[arg(long = "user-agent", value_name = "UA")]
        user_agent: String,

        /// Screen resolution, e.g. 1920x1080.
        #[arg(long = "screen", value_name = "WxH")]
        screen: Option<Screen>,
    },
    /// Render stored version info as badges.
    Badges {
        /// JSON array of {"tool", "version"} objects.
        #[arg(value_name = "JSON")]
        json: String,
    },
}

#[derive(Args)]
struct AppsArgs {
    /// Open this URI in its app.
    #[arg(long = "open", value_name = "URI")]
    open: Option<String>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Open the configuration file in $EDITOR.
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Skip paths matching this glob when scanning.
    #[arg(long = "add-exclude", value_name = "GLOB")]
    add_exclude: Option<String>,
}
