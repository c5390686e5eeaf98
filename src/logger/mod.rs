#[cfg(feature = "log")]
mod inner {
    use std::collections::HashMap;
    use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
    use colored::Colorize;

    lazy_static::lazy_static! {
        pub static ref LOGGER_COLORS: HashMap<Level, &'static str> = HashMap::from([
            (Level::Trace, "magenta"),
            (Level::Debug, "green"),
            (Level::Info, "blue"),
            (Level::Warn, "yellow"),
            (Level::Error, "red"),
        ]);
    }

    const LOG_TARGETS: [&str; 2] = ["icu_login", "icuLogin"];

    pub static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;
    pub struct ConsoleLogger;

    impl log::Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
                && LOG_TARGETS.iter().any(|t| metadata.target().starts_with(t))
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return
            }
            let level = format!("{:>7}", record.level());
            let level = match LOGGER_COLORS.get(&record.level()) {
                Some(c) => level.color(*c).to_string(),
                None => level
            };
            if log::max_level() >= LevelFilter::Debug {
                eprintln!(
                    "[{}] {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    level,
                    record.args()
                )
            } else {
                eprintln!("{}: {}", level, record.args())
            }
        }

        fn flush(&self) {}
    }

    /// Maps the number of `-d` flags to a level filter.
    pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
        if quiet {
            LevelFilter::Off
        } else {
            match verbosity {
                v if v >= 3 => LevelFilter::Trace,
                2 => LevelFilter::Debug,
                1 => LevelFilter::Info,
                _ => LevelFilter::Warn,
            }
        }
    }

    pub fn init(verbosity: u8, quiet: bool) -> Result<(), SetLoggerError> {
        log::set_logger(&CONSOLE_LOGGER)?;
        log::set_max_level(level_for(verbosity, quiet));
        Ok(())
    }
}

#[cfg(feature = "log")]
pub use inner::{init, level_for, ConsoleLogger, CONSOLE_LOGGER};

// Stand-ins for the `log` macros so call sites compile without the feature.
#[cfg(not(feature = "log"))]
mod dummy {
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
    }

    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
    }
}
