use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

static LOG_LEVEL: OnceLock<LogLevel> = OnceLock::new();

/// Pick the level once per process: `--quiet` wins over `--verbose`.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LogLevel::Warning
    } else if verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    LOG_LEVEL.set(level).ok(); // Ignore errors if already set
}

pub fn get_log_level() -> LogLevel {
    *LOG_LEVEL.get().unwrap_or(&LogLevel::Info)
}

/// Everything goes to stderr so it never mixes with the sweep report.
pub fn log(level: LogLevel, message: &str) {
    if level <= get_log_level() {
        match level {
            LogLevel::Error => eprintln!("error: {message}"),
            LogLevel::Warning => eprintln!("warning: {message}"),
            LogLevel::Info => eprintln!("{message}"),
            LogLevel::Debug => eprintln!("debug: {message}"),
        }
    }
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Debug, &format!($($arg)*))
    };
}
