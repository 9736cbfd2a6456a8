//! CLI argument parsing for timed-loop

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use timed_loop::LoopConfig;

#[derive(Parser, Debug)]
#[command(name = "timed-loop")]
#[command(author, version, about = "Poll a condition until it holds or time runs out", long_about = None)]
pub struct Cli {
    /// Path to a JSON loop configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Give up after this many seconds (default: 10)
    #[arg(short = 't', long)]
    pub max_seconds: Option<f64>,

    /// Microseconds to wait between attempts (default: 50000)
    #[arg(short, long)]
    pub retry_us: Option<u64>,

    /// Exit successfully even when time runs out
    #[arg(long)]
    pub no_fail: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Wait until a path exists
    File {
        #[arg(required = true)]
        path: PathBuf,
    },

    /// Wait until a TCP connection succeeds
    Tcp {
        /// host:port
        #[arg(required = true)]
        addr: String,

        /// Per-attempt connect timeout in milliseconds
        #[arg(long, default_value = "1000")]
        connect_timeout_ms: u64,
    },

    /// Rerun a program until it exits successfully
    Exec {
        #[arg(required = true)]
        program: String,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Cli {
    /// Command-line flags win over the configuration file.
    pub fn apply_overrides(&self, mut config: LoopConfig<bool>) -> LoopConfig<bool> {
        if let Some(seconds) = self.max_seconds {
            config.max_seconds = seconds;
        }
        if let Some(retry_us) = self.retry_us {
            config.retry_delay_us = retry_us;
        }
        if self.no_fail {
            config.throw_on_timeout = false;
        }
        config
    }
}
