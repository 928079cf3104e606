use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scheme Admin - host and headless client for the scheme administration screen
#[derive(Parser, Debug, Clone)]
#[command(name = "scheme-admin", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SCHEME_ADMIN_CONFIG", default_value = "scheme-admin.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "SCHEME_ADMIN_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "SCHEME_ADMIN_PORT")]
    pub port: Option<u16>,

    /// Origin of the scheme service
    #[arg(long, env = "SCHEME_ADMIN_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Session cookie sent by the headless commands (e.g. "token=abc")
    #[arg(long, env = "SCHEME_ADMIN_SESSION_COOKIE", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Directory with a built UI, served instead of the embedded assets
    #[arg(long, env = "SCHEME_ADMIN_UI_DIR")]
    pub ui_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the web UI (default)
    Serve,
    /// Print every scheme
    List,
    /// Edit one scheme and save it
    Update {
        /// Scheme identifier
        id: String,
        /// Field assignment, e.g. --set schemename="PM Awas"
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },
    /// Delete one scheme
    Delete {
        /// Scheme identifier
        id: String,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}
