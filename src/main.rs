use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::sync::mpsc::unbounded_channel;
use tracing::info;

mod config;
mod inventory;
mod logging;
mod table;
mod ui;

#[cfg(test)]
mod testing;

use config::Settings;
use inventory::{InventoryClient, Loader, TracingDiagnostics};

#[tokio::main]
async fn main() -> Result<()> {
  let settings = Settings::parse();

  let log_file = settings.log_file();
  logging::init(&log_file, settings.log_level())
    .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

  let client = InventoryClient::new(&settings.api_url)
    .with_context(|| format!("Bad API url {:?}", settings.api_url))?;
  info!(api = %client.base_url(), "starting");

  let (events_tx, events_rx) = unbounded_channel();
  let loader = Loader::new(client, Arc::new(TracingDiagnostics), events_tx);

  // drop returns terminal to normal mode
  ui::UI::new(ui::Session::new(loader, settings.search))?
    .listen(events_rx)
    .await?;

  // the stdin thread is still blocked on a read, don't wait for it
  std::process::exit(0);
}
