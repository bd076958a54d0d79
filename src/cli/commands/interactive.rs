use anyhow::Result;

use crate::cli::ConnectionArgs;
use crate::config::{ConfigManager, resolve_config};
use crate::repl::{Repl, ReplConfig};
use crate::translation::Direction;

pub struct InteractiveOptions {
    pub direction: Direction,
    pub connection: ConnectionArgs,
}

pub async fn run_interactive(options: InteractiveOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let resolved = resolve_config(
        &options.connection.resolve_options(),
        &manager.load_or_default()?,
    )?;

    let config = ReplConfig {
        endpoint: resolved.endpoint,
        timeout: resolved.timeout,
        direction: options.direction,
    };

    let mut repl = Repl::connect(config)?;
    repl.run().await
}
