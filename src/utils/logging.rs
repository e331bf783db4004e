//! File logging. The terminal belongs to the game, so log records go to
//! ~/.fireflap/fireflap.log instead of stderr.

use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Install the global logger, appending to `path`. The filter comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
