//! Logging setup shared by the binaries.

use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Enable timestamped logging.
    #[arg(long, global = true)]
    pub ts: bool,
}

impl LogArgs {
    /// Level used when no `-v` is given: errors, warnings and progress.
    pub const DEFAULT_LEVEL: u8 = 3;

    /// Install the stderr logger.
    ///
    /// `-v` raises the level above `default` (debug, then trace).
    pub fn setup_logging(&self, default: u8) -> Result<(), String> {
        let level = default.saturating_add(self.verbose);

        let log_level = match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .module(env!("CARGO_CRATE_NAME"))
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()
            .map_err(|e| format!("Failed to initialise logging: {}", e))
    }
}
