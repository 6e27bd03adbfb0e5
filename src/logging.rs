use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use env_logger::{Builder, Env, Target};

use crate::error::{Context, Result};

/// Route `log` records into `path`.
///
/// The alternate screen owns stdout/stderr while the wizard runs, so records
/// are appended to a file instead. `RUST_LOG` wins over `default_level`.
pub fn init(path: &Path, default_level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .context("logger already initialised")?;

    Ok(())
}
