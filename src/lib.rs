pub mod client;
pub mod collectors;
pub mod commands;
pub mod config;
pub mod control;
pub mod dashboard;
pub mod models;
pub mod panel;
pub mod poller;
pub mod renderer;

use crate::client::RealtimeDb;
use crate::commands::InputEnd;
use crate::config::AppConfig;
use crate::panel::Panel;
use anyhow::Context;
use log::{error, info};
use std::sync::Arc;

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting irrigation panel");

    match main_loop(config).await {
        Ok(_) => info!("Irrigation panel stopped"),
        Err(e) => {
            error!("Application error: {e:#}");
            // Print chain of error causes
            for cause in e.chain().skip(1) {
                error!("Caused by: {cause}");
            }
            return Err(e).context("Application failed to run");
        }
    }

    Ok(())
}

async fn main_loop(config: AppConfig) -> anyhow::Result<()> {
    let store = RealtimeDb::new(&config.store.base_url).context("Failed to create store client")?;
    info!("Using realtime database at {}", store.base_url());

    let period = config.panel.polling_interval();
    let panel = Arc::new(Panel::new(Arc::new(store), config));
    let input = commands::spawn_stdin_reader()?;

    println!("{}", commands::HELP);
    let poller = poller::spawn(panel.clone(), period);

    let result = tokio::select! {
        end = commands::read_commands(panel.clone(), input) => match end {
            InputEnd::Quit => Ok(()),
            InputEnd::Closed => {
                info!("Standard input closed, polling until Ctrl-C");
                tokio::signal::ctrl_c().await.context("Failed to listen for Ctrl-C")
            }
        },
        signal = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            signal.context("Failed to listen for Ctrl-C")
        }
    };

    if !poller.is_running() {
        error!("Polling task ended before shutdown");
    }
    poller.stop().await;
    result
}
