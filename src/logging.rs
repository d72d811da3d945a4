// Logging setup: a simplelog terminal logger on stderr. While progress bars
// are drawn the logger is wrapped so each line suspends the bars first.

use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

fn config() -> Config {
    ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Install the global terminal logger at `level`.
///
/// Safely no-ops if a logger is already installed.
pub fn initialize(level: LevelFilter) {
    let _ = TermLogger::init(level, config(), TerminalMode::Stderr, ColorChoice::Auto);
}

/// Install the terminal logger behind `progress`, so log lines never tear
/// a spinner that is being redrawn.
pub fn initialize_with_progress(level: LevelFilter, progress: &MultiProgress) {
    let logger = TermLogger::new(level, config(), TerminalMode::Stderr, ColorChoice::Auto);
    if LogWrapper::new(progress.clone(), logger).try_init().is_ok() {
        log::set_max_level(level);
    }
}

/// Initializes a debug-level logger for use in tests.
pub fn initialize_for_tests() {
    initialize(LevelFilter::Debug);
}
