//! Log output for the `lunisolar` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Crates whose events follow the `-v` flag. Everything else logs at warn.
const TARGETS: [&str; 5] = [
    "lunisolar",
    "lunisolar_calendar",
    "lunisolar_ephem",
    "lunisolar_sexagenary",
    "lunisolar_time",
];

/// Install the global subscriber on stderr; stdout carries only results.
///
/// `RUST_LOG`, when set, replaces the level chosen by `-v`.
pub fn init(verbosity: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(directives(verbosity)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}

/// Quiet by default, one step louder per `-v`.
fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(verbosity: u8) -> String {
    let level = level(verbosity);
    let mut out = String::from("warn");
    for target in TARGETS {
        out.push_str(&format!(",{target}={level}"));
    }
    out
}
