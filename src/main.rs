use anyhow::{Context, Result};
use std::io;
use tracing_subscriber::EnvFilter;

use labbot::interface::{ActionWriter, TurnReader};
use labbot::kernel::reactor::{Reactor, ReactorConfig};
use labbot::kernel::scheduler::SideEffect;

fn main() -> Result<()> {
    // stdout belongs to the referee; all logging goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
    tracing::info!("labbot booting...");

    let mut reader = TurnReader::new(io::stdin().lock());
    let mut writer = ActionWriter::new(io::stdout().lock());

    let projects = reader.read_preamble().context("reading project list")?;
    tracing::info!("Skipped {} projects", projects.len());

    let mut reactor = Reactor::new(ReactorConfig::default());

    while let Some(turn) = reader.read_turn()? {
        // A malformed snapshot ends the game loop without emitting a line.
        let effects = reactor.tick_step(turn)?;

        for effect in effects {
            match effect {
                SideEffect::Log(msg) => tracing::debug!("{}", msg),
                SideEffect::Emit(action) => writer.emit(&action)?,
            }
        }
    }

    let summary = reactor.telemetry.snapshot();
    tracing::info!(
        "Input closed after {} turns: {}",
        reactor.tick.turn,
        serde_json::to_string(&summary)?
    );
    Ok(())
}
