use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use usb_loader::command::locate;
use usb_loader::{
    ApiResponse, CommandRunner, InventoryService, Router, Server, ServerConfig, SystemRunner,
};

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    usb_loader::logging::init(cli.verbose);

    let config = cli.config();
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner::new());

    match cli.command {
        Some(cli::Command::Disks) => print_inventory(&config, runner).await,
        Some(cli::Command::Serve(_)) | None => {
            serve(config, runner).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(config: ServerConfig, runner: Arc<dyn CommandRunner>) -> Result<()> {
    for spec in [
        &config.commands.listing,
        &config.commands.mkdir,
        &config.commands.mount,
    ] {
        if locate(&spec.program).is_none() {
            warn!("{} not found; requests that need it will fail", spec.program);
        }
    }
    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} does not exist; only the API will be served",
            config.static_dir.display()
        );
    }

    let router = Router::new(&config, runner);
    let server = Server::bind(config.bind_addr, router)
        .await
        .with_context(|| format!("Failed to start server on {}", config.bind_addr))?;

    server
        .serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("Server stopped unexpectedly")?;

    info!("USB Loader server stopped");
    Ok(())
}

async fn print_inventory(config: &ServerConfig, runner: Arc<dyn CommandRunner>) -> Result<ExitCode> {
    let inventory = InventoryService::new(runner, config.commands.listing.clone());
    let listed = tokio::task::spawn_blocking(move || inventory.list_devices())
        .await
        .context("Disk listing task failed")?;

    let (envelope, code) = match listed {
        Ok(devices) => (
            ApiResponse::ok("Disk information retrieved successfully", devices),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            ApiResponse::failure(format!("Failed to get disk information: {e}")),
            ExitCode::FAILURE,
        ),
    };

    let json = serde_json::to_string_pretty(&envelope).context("Failed to encode inventory")?;
    println!("{json}");
    Ok(code)
}
