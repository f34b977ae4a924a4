use acceptlang::extension::TomlTableExt;
use std::io;
use toml::Table;
use tracing::Level;

/// Initializes the tracing subscriber which writes to the standard error.
///
/// The level is `DEBUG` in the verbose mode. Otherwise it is read from
/// the `level` option of the `[tracing]` table and defaults to `WARN`.
pub(crate) fn init(verbose: bool, config: Option<&Table>) {
    let level = if verbose {
        Level::DEBUG
    } else {
        config
            .and_then(|config| config.get_table("tracing"))
            .and_then(|config| config.get_str("level"))
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::WARN)
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(verbose)
        .init();
}
