//! Utility modules supporting citation generation.
//!
//! - [`format_record`]: Format a [`SourceRecord`](crate::models::SourceRecord) as a reference and in-text citation
//! - [`format_authors`]: Join an author list for reference or in-text use
//! - [`validate_year`]: Accept a blank or four-digit year
//! - [`resolve_date`]: Combine day, month and year into a publication date
//! - [`CitationLog`]: Append-only text log of generated citations
//!
//! # Formatting
//!
//! ```rust
//! use harvard_cite::models::{Author, BookFields, SourceRecord};
//! use harvard_cite::utils::format_record;
//!
//! let record = SourceRecord::Book(BookFields {
//!     authors: vec![Author::person("Smith", "John")],
//!     year: "2020".to_string(),
//!     title: "Systems Design".to_string(),
//!     city: "London".to_string(),
//!     publisher: "Acme Press".to_string(),
//!     ..Default::default()
//! });
//!
//! let citation = format_record(&record);
//! assert_eq!(citation.reference, "Smith, J. (2020) 'Systems Design' London: Acme Press.");
//! assert_eq!(citation.intext, "(Smith, J., 2020)");
//! ```

pub mod cite;
mod log;
mod validate;

pub use cite::{build_citation, format_authors, format_record, title_case};
pub use log::{CitationLog, LogError, DEFAULT_LOG_FILE};
pub use validate::{resolve_date, validate_year, ValidationError};
