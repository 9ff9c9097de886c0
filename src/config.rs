use bank::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` overrides the default level.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    return Ok(());
}
