use clap::Parser;
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "POKEDEX_LOG";

/// Runtime settings for the `pokedex` binary.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version, about = "Interactive Pokedex")]
pub struct AppConfig {
    /// Roster file to load; the built-in starter roster when omitted
    pub roster: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, env = LOG_LEVEL_VAR, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster: None,
            log_level: LevelFilter::Warn,
        }
    }
}

impl AppConfig {
    /// Parse a full argument list, program name first.
    pub fn from_parts<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}
