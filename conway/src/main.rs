// main.rs - Headless runner: draws the panel in the terminal

use anyhow::Context;
use clap::Parser;
use conway::{Config, ConfigArgs, SimulationLoop, SystemClock, TerminalSink};

/// Run Conway's Game of Life on a simulated LED panel in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::try_from(cli.config).context("invalid configuration")?;
    log::info!(
        "{}x{} {:?} panel, {:?} per generation",
        config.width(),
        config.height(),
        config.wiring,
        config.generation_delay
    );

    let mut sim = SimulationLoop::new(config).context("failed to build simulation")?;
    let mapper = *sim.frame().mapper();
    let mut sink = TerminalSink::new(std::io::stdout().lock(), mapper);
    match sim
        .run(&mut sink, &mut SystemClock::new())
        .context("display failed")?
    {}
}
