use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger.
///
/// The game owns the terminal, so nothing is logged unless `log_file` is
/// given. Inside the file, `RUST_LOG` wins; otherwise `verbose` selects
/// debug over info.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        let _ = Builder::new().filter_level(LevelFilter::Off).try_init();
        return Ok(());
    };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    // `try_init` only fails if a logger was already set.
    let _ = builder.try_init();
    Ok(())
}
