//! The Movie Database CLI Library
//!
//! This library backs the `moviedbcli` binary: a small client for the TMDB v3
//! API that lists popular people and movies, fetches single people and movies
//! (or their reviews), and can keep the last fetched page of each listing in a
//! local JSON cache.
//!
//! # Modules
//!
//! - `cli` - Command implementations
//! - `config` - Configuration from environment variables and `.env`
//! - `errors` - The error type shared by all commands
//! - `management` - Local page cache
//! - `printer` - Terminal rendering of payloads
//! - `progress` - Spinner shown while a command runs
//! - `tmdb` - TMDB API client
//! - `types` - Payload and table row types

pub mod cli;
pub mod config;
pub mod errors;
pub mod management;
pub mod printer;
pub mod progress;
pub mod tmdb;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Popular movies page {} saved", page);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a failure message with a red cross without exiting.
///
/// Used to resolve a spinner on a failed command; the caller decides how the
/// process ends.
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✗".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr, so it
/// never mixes with command output.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
