use std::io::Write;

use anyhow::Context;
use clap::Parser;

use bakery_cli::console::banner;
use bakery_cli::menu::INTERRUPTED;
use bakery_cli::{Cli, Console, ConsoleError};
use bakery_inventory::InventoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    bakery_observability::init(&config.log);

    let session = tokio::task::spawn_blocking(|| {
        let mut console = Console::stdio();
        let mut store = InventoryStore::new();
        menu_session(&mut console, &mut store)
    });

    tokio::select! {
        joined = session => match joined.context("menu task panicked")? {
            Ok(()) => Ok(()),
            Err(ConsoleError::Closed) => interrupted(),
            Err(err) => Err(err).context("console session failed"),
        },
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for interrupt")?;
            interrupted()
        }
    }
}

fn menu_session(
    console: &mut Console<std::io::StdinLock<'static>, std::io::Stdout>,
    store: &mut InventoryStore,
) -> Result<(), ConsoleError> {
    tracing::info!("bakery inventory session started");
    let result = bakery_cli::run(console, store);
    tracing::info!(records = store.len(), "bakery inventory session ended");
    result
}

fn interrupted() -> ! {
    print!("{}", banner(INTERRUPTED));
    let _ = std::io::stdout().flush();
    tracing::info!("session interrupted");
    // The menu thread is parked in a blocking stdin read and cannot be joined.
    std::process::exit(0);
}
