//! # CLI Module
//!
//! Command-line layer on top of [`crate::pipeline`]. It owns everything the
//! pipeline deliberately does not: reading references from arguments, files
//! or stdin, applying flag overrides to [`crate::config::Settings`], writing
//! the finished document and printing a summary.
//!
//! ## Usage Patterns
//!
//! ```bash
//! pipedport convert "https://www.youtube.com/playlist?list=PL..."
//! pipedport convert --input links.txt --output piped-music-playlist.json
//! pbpaste | pipedport convert --mode freeform
//! ```
//!
//! Log lines go to stderr; the document goes to stdout unless `--output` is
//! given, so the command can be piped.

mod convert;

pub use convert::ConvertOptions;
pub use convert::convert;
