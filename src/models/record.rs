//! Source types and the raw field values collected for each of them.
//!
//! Every field is a trimmed string; an empty string means the field was not
//! supplied and its fragment is dropped from the reference.

use super::Author;
use serde::{Deserialize, Serialize};

/// The kind of work being cited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Book,
    Article,
    Website,
    Newspaper,
    Conference,
    Thesis,
    Report,
    Chapter,
}

impl SourceType {
    /// All source types in menu order
    pub const ALL: [SourceType; 8] = [
        SourceType::Book,
        SourceType::Article,
        SourceType::Website,
        SourceType::Newspaper,
        SourceType::Conference,
        SourceType::Thesis,
        SourceType::Report,
        SourceType::Chapter,
    ];

    /// Returns the display name of the source type
    pub fn name(&self) -> &'static str {
        match self {
            SourceType::Book => "Book",
            SourceType::Article => "Journal Article",
            SourceType::Website => "Website",
            SourceType::Newspaper => "Newspaper",
            SourceType::Conference => "Conference",
            SourceType::Thesis => "Thesis",
            SourceType::Report => "Report",
            SourceType::Chapter => "Book Chapter",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFields {
    pub authors: Vec<Author>,
    pub year: String,
    pub title: String,
    pub edition: String,
    pub city: String,
    pub publisher: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
    pub authors: Vec<Author>,
    pub year: String,
    pub title: String,
    pub journal: String,
    pub volume: String,
    pub issue: String,
    pub pages: String,
    pub doi: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteFields {
    pub authors: Vec<Author>,
    /// Used as the sole author when `authors` is empty
    pub organization: String,
    pub year: String,
    pub title: String,
    pub site_name: String,
    pub url: String,
    pub accessed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewspaperFields {
    pub authors: Vec<Author>,
    /// `"D Month YYYY"`, a bare year, or empty
    pub date: String,
    pub title: String,
    pub newspaper: String,
    pub edition: String,
    pub pages: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConferenceFields {
    pub authors: Vec<Author>,
    pub year: String,
    pub title: String,
    pub conference: String,
    pub location: String,
    pub dates: String,
    pub pages: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThesisFields {
    pub authors: Vec<Author>,
    pub year: String,
    pub title: String,
    pub degree: String,
    pub institution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFields {
    pub authors: Vec<Author>,
    /// Used as the sole author when `authors` is empty
    pub organization: String,
    pub year: String,
    pub title: String,
    pub report_number: String,
    pub institution: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterFields {
    pub authors: Vec<Author>,
    pub year: String,
    pub chapter_title: String,
    pub editors: Vec<Author>,
    pub book_title: String,
    pub edition: String,
    pub city: String,
    pub publisher: String,
    pub pages: String,
}

/// The field values of one citation request, tagged by source type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRecord {
    Book(BookFields),
    Article(ArticleFields),
    Website(WebsiteFields),
    Newspaper(NewspaperFields),
    Conference(ConferenceFields),
    Thesis(ThesisFields),
    Report(ReportFields),
    Chapter(ChapterFields),
}

impl SourceRecord {
    /// The source type this record belongs to
    pub fn source_type(&self) -> SourceType {
        match self {
            SourceRecord::Book(_) => SourceType::Book,
            SourceRecord::Article(_) => SourceType::Article,
            SourceRecord::Website(_) => SourceType::Website,
            SourceRecord::Newspaper(_) => SourceType::Newspaper,
            SourceRecord::Conference(_) => SourceType::Conference,
            SourceRecord::Thesis(_) => SourceType::Thesis,
            SourceRecord::Report(_) => SourceType::Report,
            SourceRecord::Chapter(_) => SourceType::Chapter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_names() {
        assert_eq!(SourceType::Article.name(), "Journal Article");
        assert_eq!(SourceType::Chapter.to_string(), "Book Chapter");
        assert_eq!(SourceType::ALL.len(), 8);
    }

    #[test]
    fn test_record_source_type() {
        let record = SourceRecord::Thesis(ThesisFields::default());
        assert_eq!(record.source_type(), SourceType::Thesis);
    }
}
