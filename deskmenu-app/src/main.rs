use anyhow::Result;
use clap::Parser;
use deskmenu_app::cli::Cli;
use deskmenu_app::{commands, logging, Desktop};
use deskmenu_config::Settings;
use deskmenu_core::{Notification, Urgency};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let settings = Settings::load_or_default(cli.config.as_deref()).await;
    let desktop = Desktop::system(settings);

    // Bound to keys: report failures on the desktop, never as a crash
    if let Err(e) = commands::run(&desktop, cli.command).await {
        tracing::error!("{:#}", e);
        desktop
            .notify(Notification::new("deskmenu", format!("{:#}", e)).urgency(Urgency::Critical))
            .await;
    }

    Ok(())
}
