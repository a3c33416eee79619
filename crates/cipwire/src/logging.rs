use clap::ValueEnum;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;

        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }

    /// Returns true if decode read faults (logged at `warn`) reach stderr.
    pub fn shows_read_faults(self) -> bool {
        self.as_filter() >= tracing::level_filters::LevelFilter::WARN
    }
}

/// Install the stderr subscriber.
///
/// Logs go to stderr so `--format json` output on stdout stays parseable.
/// Unit decodes are traced at `trace`, unit runs at `debug`.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level.as_filter())
        .with_ansi(false)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    tracing::debug!(read_faults = level.shows_read_faults(), "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_faults_visible_from_warn_up() {
        assert!(!LogLevel::Off.shows_read_faults());
        assert!(!LogLevel::Error.shows_read_faults());
        assert!(LogLevel::Warn.shows_read_faults());
        assert!(LogLevel::Trace.shows_read_faults());
    }
}
