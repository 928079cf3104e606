use clap::Parser;
use scheme_admin::adapters::http_client::HttpSchemeApi;
use scheme_admin::cli::{Cli, Command};
use scheme_admin::commands::{self, CommandError};
use scheme_admin::config::Settings;
use scheme_admin_core::SchemeListController;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    tracing_subscriber::fmt()
        .with_max_level(settings.logging.level())
        .with_writer(std::io::stderr)
        .init();

    match cli.command() {
        Command::Serve => serve(settings).await,
        command => {
            let api = HttpSchemeApi::from_settings(&settings.api);
            let mut controller = SchemeListController::new(api);
            let mut stdout = std::io::stdout();
            match commands::run(command, &mut controller, &mut stdout).await {
                Ok(()) => Ok(()),
                Err(CommandError::SessionExpired) => {
                    eprintln!("{}", CommandError::SessionExpired);
                    std::process::exit(2);
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

async fn serve(settings: Settings) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!(
        "Starting Scheme Admin on {} (scheme service: {})",
        addr, settings.api.base_url
    );

    let app = scheme_admin::create_app(Arc::new(settings));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
