// newsreel-cli/src/logging.rs
//
// Logging setup for the Newsreel CLI.
//
// The application uses the standard `log` crate with `env_logger` as the
// backend. Verbosity is controlled through the RUST_LOG environment variable:
// - RUST_LOG=info (default): normal operation logs
// - RUST_LOG=debug: detailed debugging information, including the full
//   filter graph passed to ffmpeg
//
// The --verbose flag only changes the default filter, so an explicit
// RUST_LOG value always wins.

use std::io::Write;

/// Initializes the global logger.
///
/// Info-level records are printed bare so the terminal output reads as plain
/// status text; other levels keep their level prefix.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format(|buf, record| {
        if record.level() == log::Level::Info {
            writeln!(buf, "{}", record.args())
        } else {
            writeln!(buf, "{}: {}", record.level(), record.args())
        }
    })
    .init();
}
