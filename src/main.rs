//! teller - Interactive Bank Teller Console
//!
//! Single-process, in-memory ledger driven by a text menu on stdin/stdout.
//! Everything lives for one session; quitting discards all state.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teller::console::Console;
use teller::directory::Directory;
use teller::Config;

/// Initialize tracing/logging
///
/// Diagnostics go to stderr so they never interleave with the menu.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teller=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Starting teller session (branch {})", config.branch);

    let mut directory = Directory::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config);
    console.run(&mut directory)?;

    tracing::info!("Session closed, in-memory state discarded");
    Ok(())
}
