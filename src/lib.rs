// Lightweight verbosity-gated logging helper used throughout the crate.
macro_rules! vprintln {
	($verbose:expr, $level:expr, $($arg:tt)*) => {
		if $verbose >= $level {
			eprintln!($($arg)*);
		}
	};
}

// Public library re-exports for integration tests and external use.
pub mod candidates;
pub mod cli;
pub mod config;
pub mod game_console;
pub mod naming;
pub mod pipeline;
pub mod thumbnail;
pub mod types;
pub mod utils;
