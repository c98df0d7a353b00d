mod cli;
mod error;
mod file_handler;
mod logger;
mod orchestrator;
mod processing;
mod replay;

pub use cli::{AlgorithmChoice, Cli};
pub use error::AppError;
pub use file_handler::resolve_maze;
pub use orchestrator::run_app;
pub use replay::{render_frame, replay_to_writer, IntervalTicker, TickSource};

// Macros for use by child modules of app (orchestrator, processing, file_handler, replay).
// They expand in a sibling module, where `super` is `app`, so `super::logger`
// resolves to this module's logger.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

use verbose_eprintln;
use verbose_println;
