use std::{fs::File, path::Path};

use anyhow::Context;

/// Sets up `env_logger`.
///
/// The terminal UI owns stdout/stderr, so logging is off unless `RUST_LOG` is set or a log file
/// is given; with a file the default filter is `info`.
pub fn init(log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {} failed", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("logger already initialized")
}
