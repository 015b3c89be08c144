//! # Harvard Cite
//!
//! Builds Harvard-style reference list entries and their in-text citations
//! for books, journal articles, websites, newspapers, conference papers,
//! theses, reports and book chapters.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Authors, per-type field records, and the formatted [`Citation`]
//! - [`utils`]: The citation formatter, year/date validation, and the citation log
//! - [`prompt`]: Question-and-answer collection of field values
//! - [`session`]: The interactive menu loop
//! - [`ui`]: Terminal coloring and citation listings
//! - [`config`]: Configuration management

pub mod config;
pub mod models;
pub mod prompt;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use models::{Citation, SourceRecord, SourceType};
pub use session::{Session, SessionOptions};
pub use utils::format_record;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
