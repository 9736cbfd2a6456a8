use std::time::Duration;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use timed_loop::{LoopConfig, TimedLoop};

mod cli;
mod config;
mod probe;

use cli::{Cli, Command};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!(e))?;

    Ok(())
}

/// Run the selected probe in a timed loop and return its final value.
fn wait(command: &Command, config: LoopConfig<bool>) -> Result<bool> {
    let value = match command {
        Command::File { path } => {
            TimedLoop::with_config(probe::file_exists, config).invoke((path.as_path(),))?
        }
        Command::Tcp {
            addr,
            connect_timeout_ms,
        } => TimedLoop::with_config(probe::tcp_reachable, config)
            .try_call((addr.as_str(), Duration::from_millis(*connect_timeout_ms)))?,
        Command::Exec { program, args } => TimedLoop::with_config(probe::exec_succeeds, config)
            .try_call((program.as_str(), args.as_slice()))?,
    };
    Ok(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).wrap_err("Failed to setup logging")?;

    let config = config::load(cli.config.as_deref()).wrap_err("Failed to load configuration")?;
    let config = cli.apply_overrides(config);
    let continue_value = config.continue_value;
    debug!(?config, command = ?cli.command, "starting loop");

    let value = wait(&cli.command, config)?;
    if value == continue_value {
        info!("time ran out, exiting successfully because of --no-fail");
        println!("not ready");
    } else {
        println!("ready");
    }
    Ok(())
}
