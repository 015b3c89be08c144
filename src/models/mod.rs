//! Core data models for citation requests and their formatted output.

mod author;
mod citation;
mod record;

pub use author::{Author, AuthorMode};
pub use citation::Citation;
pub use record::{
    ArticleFields, BookFields, ChapterFields, ConferenceFields, NewspaperFields, ReportFields,
    SourceRecord, SourceType, ThesisFields, WebsiteFields,
};
