//! Logger setup.
//!
//! The terminal front end owns stdout and the alternate screen, so log
//! records should go to a file while it runs. Without a log path they go
//! to stderr, filtered by `RUST_LOG` (default `warn`).

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::HostConfig;

pub fn init_logging(config: &HostConfig) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("install logger")?;
    Ok(())
}
