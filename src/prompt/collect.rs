//! Per-source-type question sequences.

use super::{PromptError, Prompter};
use crate::models::{
    ArticleFields, BookFields, ChapterFields, ConferenceFields, NewspaperFields, ReportFields,
    SourceRecord, SourceType, ThesisFields, WebsiteFields,
};
use std::io::{BufRead, Write};

/// Ask every question for `source_type` and return the filled-in record
pub fn collect_record<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    source_type: SourceType,
) -> Result<SourceRecord, PromptError> {
    let record = match source_type {
        SourceType::Book => SourceRecord::Book(collect_book(prompter)?),
        SourceType::Article => SourceRecord::Article(collect_article(prompter)?),
        SourceType::Website => SourceRecord::Website(collect_website(prompter)?),
        SourceType::Newspaper => SourceRecord::Newspaper(collect_newspaper(prompter)?),
        SourceType::Conference => SourceRecord::Conference(collect_conference(prompter)?),
        SourceType::Thesis => SourceRecord::Thesis(collect_thesis(prompter)?),
        SourceType::Report => SourceRecord::Report(collect_report(prompter)?),
        SourceType::Chapter => SourceRecord::Chapter(collect_chapter(prompter)?),
    };
    Ok(record)
}

fn collect_book<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<BookFields, PromptError> {
    Ok(BookFields {
        authors: p.authors()?,
        year: p.year()?,
        title: p.text("Book title")?,
        edition: p.text("Edition")?,
        city: p.text("City")?,
        publisher: p.text("Publisher")?,
    })
}

fn collect_article<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<ArticleFields, PromptError> {
    Ok(ArticleFields {
        authors: p.authors()?,
        year: p.year()?,
        title: p.text("Article title")?,
        journal: p.text("Journal")?,
        volume: p.text("Volume")?,
        issue: p.text("Issue")?,
        pages: p.text("Pages")?,
        doi: p.text("DOI")?,
    })
}

/// Websites and reports only ask for an organization when no author was given.
fn organization_if_unsigned<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    has_authors: bool,
) -> Result<String, PromptError> {
    if has_authors {
        Ok(String::new())
    } else {
        p.text("Organization")
    }
}

fn collect_website<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<WebsiteFields, PromptError> {
    let authors = p.authors()?;
    let organization = organization_if_unsigned(p, !authors.is_empty())?;
    Ok(WebsiteFields {
        authors,
        organization,
        year: p.year()?,
        title: p.text("Page title")?,
        site_name: p.text("Website")?,
        url: p.text("URL")?,
        accessed: p.text("Accessed date")?,
    })
}

fn collect_newspaper<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<NewspaperFields, PromptError> {
    Ok(NewspaperFields {
        authors: p.authors()?,
        date: p.date()?,
        title: p.text("Article title")?,
        newspaper: p.text("Newspaper")?,
        edition: p.text("Edition")?,
        pages: p.text("Pages")?,
    })
}

fn collect_conference<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<ConferenceFields, PromptError> {
    Ok(ConferenceFields {
        authors: p.authors()?,
        year: p.year()?,
        title: p.text("Paper title")?,
        conference: p.text("Conference")?,
        location: p.text("Location")?,
        dates: p.text("Dates")?,
        pages: p.text("Pages")?,
    })
}

fn collect_thesis<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<ThesisFields, PromptError> {
    Ok(ThesisFields {
        authors: p.authors()?,
        year: p.year()?,
        title: p.text("Thesis title")?,
        degree: p.text("Degree")?,
        institution: p.text("Institution")?,
    })
}

fn collect_report<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<ReportFields, PromptError> {
    let authors = p.authors()?;
    let organization = organization_if_unsigned(p, !authors.is_empty())?;
    Ok(ReportFields {
        authors,
        organization,
        year: p.year()?,
        title: p.text("Report title")?,
        report_number: p.text("Report number")?,
        institution: p.text("Institution")?,
        location: p.text("Location")?,
    })
}

fn collect_chapter<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<ChapterFields, PromptError> {
    Ok(ChapterFields {
        authors: p.authors()?,
        year: p.year()?,
        chapter_title: p.text("Chapter title")?,
        editors: p.editors()?,
        book_title: p.text("Book title")?,
        edition: p.text("Edition")?,
        city: p.text("City")?,
        publisher: p.text("Publisher")?,
        pages: p.text("Pages")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    fn collect(source_type: SourceType, script: &str) -> SourceRecord {
        let mut p = Prompter::new(script.as_bytes(), Vec::new(), false);
        collect_record(&mut p, source_type).unwrap()
    }

    #[test]
    fn test_collect_book() {
        let record = collect(
            SourceType::Book,
            "Smith\nJohn\n\n2020\nSystems Design\n\nLondon\nAcme Press\n",
        );
        assert_eq!(
            record,
            SourceRecord::Book(BookFields {
                authors: vec![Author::person("Smith", "John")],
                year: "2020".to_string(),
                title: "Systems Design".to_string(),
                edition: String::new(),
                city: "London".to_string(),
                publisher: "Acme Press".to_string(),
            })
        );
    }

    #[test]
    fn test_collect_website_asks_for_organization() {
        let record = collect(
            SourceType::Website,
            "\nBBC\n2022\nNews\nBBC Online\nhttps://bbc.co.uk\n1 March 2023\n",
        );
        match record {
            SourceRecord::Website(fields) => {
                assert!(fields.authors.is_empty());
                assert_eq!(fields.organization, "BBC");
                assert_eq!(fields.accessed, "1 March 2023");
            }
            other => panic!("Expected website record, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_report_skips_organization_with_author() {
        let record = collect(
            SourceType::Report,
            "Doe\nJane\n\n2001\nAudit\n7\nTreasury\nLondon\n",
        );
        match record {
            SourceRecord::Report(fields) => {
                assert_eq!(fields.organization, "");
                assert_eq!(fields.title, "Audit");
                assert_eq!(fields.report_number, "7");
                assert_eq!(fields.location, "London");
            }
            other => panic!("Expected report record, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_newspaper_date() {
        let record = collect(
            SourceType::Newspaper,
            "\n2021\nMay\n5\nMarkets Rally\nTimes\n\n\n",
        );
        match record {
            SourceRecord::Newspaper(fields) => {
                assert_eq!(fields.date, "5 May 2021");
                assert_eq!(fields.newspaper, "Times");
            }
            other => panic!("Expected newspaper record, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_chapter_editors() {
        let record = collect(
            SourceType::Chapter,
            "Smith\nJ\n\n2010\nOwnership\nDoe\nA\nRoe\nB\n\nthe rust book\n\nBoston\nMIT Press\n10-20\n",
        );
        match record {
            SourceRecord::Chapter(fields) => {
                assert_eq!(fields.editors.len(), 2);
                assert_eq!(fields.book_title, "the rust book");
                assert_eq!(fields.pages, "10-20");
            }
            other => panic!("Expected chapter record, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_stops_at_end_of_input() {
        let mut p = Prompter::new("Smith\n".as_bytes(), Vec::new(), false);
        assert!(matches!(
            collect_record(&mut p, SourceType::Thesis),
            Err(PromptError::EndOfInput)
        ));
    }
}
