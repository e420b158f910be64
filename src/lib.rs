//! Playlist to Piped Music converter library
//!
//! This library turns playlist references from YouTube and Spotify into a
//! single Piped Music import document. It includes modules for classifying
//! input, fetching third-party pages through relay endpoints, extracting
//! playlist data from markup and pasted text, resolving Spotify tracks to
//! YouTube videos and aggregating everything into the export format.
//!
//! # Modules
//!
//! - `classify` - Input line classification by source kind
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Typed pipeline errors
//! - `extract` - Ordered pattern strategies for scraping
//! - `pipeline` - Run orchestration and output aggregation
//! - `relay` - Fetch-with-fallback client over relay endpoints
//! - `spotify` - Spotify Web API client and pasted data parser
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `youtube` - YouTube playlist extraction and search matching
//!
//! # Example
//!
//! ```
//! use pipedport::{config, pipeline::{InputMode, Pipeline}};
//!
//! #[tokio::main]
//! async fn main() -> pipedport::Res<()> {
//!     config::load_env().await?;
//!     let pipeline = Pipeline::new(config::Settings::from_env())?;
//!     let document = pipeline
//!         .run("https://www.youtube.com/playlist?list=PL123", InputMode::Auto)
//!         .await?;
//!     println!("{}", document.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod relay;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod youtube;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command-line layer where any error only needs to be reported
/// to the user. Pipeline internals return [`error::Result`] instead so callers
/// can tell fatal and per-reference failures apart.
///
/// # Example
///
/// ```
/// use pipedport::Res;
///
/// async fn read_input() -> Res<String> {
///     Ok("https://www.youtube.com/playlist?list=PL123".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Output goes to stderr so the generated document can be piped from stdout.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", list_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Converted {} songs", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal errors in the binary. Library code returns
/// [`error::ConvertError`] instead.
///
/// # Example
///
/// ```
/// error!("Failed to write output file: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for per-reference and per-track failures that are skipped without
/// aborting the run.
///
/// # Example
///
/// ```
/// warning!("Skipping line {}: unsupported reference", position);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
