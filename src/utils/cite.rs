//! Harvard-style reference and in-text citation formatting.
//!
//! Each source type contributes an ordered list of optional fragments that are
//! joined behind a shared `Authors (Year) 'Title'` lead. Absent fields drop
//! their fragment entirely, so no combination of fields can fail.

use crate::models::{
    ArticleFields, Author, AuthorMode, BookFields, ChapterFields, Citation, ConferenceFields,
    NewspaperFields, ReportFields, SourceRecord, SourceType, ThesisFields, WebsiteFields,
};

/// In-text marker used when neither authors nor a year are known
pub const NO_DATE: &str = "(n.d.)";

/// Placeholder author for unsigned newspaper articles
pub const ANONYMOUS: &str = "Anon";

/// Format a source record as a reference entry and in-text citation
pub fn format_record(record: &SourceRecord) -> Citation {
    let citation = match record {
        SourceRecord::Book(fields) => format_book(fields),
        SourceRecord::Article(fields) => format_article(fields),
        SourceRecord::Website(fields) => format_website(fields),
        SourceRecord::Newspaper(fields) => format_newspaper(fields),
        SourceRecord::Conference(fields) => format_conference(fields),
        SourceRecord::Thesis(fields) => format_thesis(fields),
        SourceRecord::Report(fields) => format_report(fields),
        SourceRecord::Chapter(fields) => format_chapter(fields),
    };
    tracing::debug!(
        source_type = %citation.source_type,
        reference = %citation.reference,
        intext = %citation.intext,
        "Formatted citation"
    );
    citation
}

/// Join an author list for a reference entry or an in-text marker.
///
/// Reference mode names up to three authors before "et al.", while in-text
/// mode collapses to the first author once there are more than two. Returns
/// `None` for an empty list.
pub fn format_authors(authors: &[Author], mode: AuthorMode) -> Option<String> {
    match (mode, authors) {
        (_, []) => None,
        (_, [a]) => Some(a.to_string()),
        (_, [a, b]) => Some(format!("{} and {}", a, b)),
        (AuthorMode::Intext, [a, ..]) => Some(format!("{} et al.", a)),
        (AuthorMode::Reference, [a, b, c]) => Some(format!("{}, {} and {}", a, b, c)),
        (AuthorMode::Reference, [a, b, c, ..]) => Some(format!("{}, {}, {} et al.", a, b, c)),
    }
}

/// Assemble a reference and in-text citation from shared parts.
///
/// `parts` are trailing fragments that already carry their own punctuation;
/// empty ones are skipped. Returns `(reference, intext)`.
pub fn build_citation(
    authors: &[Author],
    year: &str,
    title: &str,
    parts: &[String],
) -> (String, String) {
    let mut citation_parts: Vec<String> = Vec::new();

    if let Some(lead) = leading_clause(authors, year) {
        citation_parts.push(lead);
    }

    if !title.is_empty() {
        citation_parts.push(format!("'{}'", title));
    }

    citation_parts.extend(parts.iter().filter(|p| !p.is_empty()).cloned());

    let reference = end_with_period(citation_parts.join(" "));
    (reference, intext_citation(authors, year))
}

/// `"Authors (Date)"`, `"Authors"`, `"(Date)"`, or nothing.
fn leading_clause(authors: &[Author], date: &str) -> Option<String> {
    match (format_authors(authors, AuthorMode::Reference), date.is_empty()) {
        (Some(names), false) => Some(format!("{} ({})", names, date)),
        (Some(names), true) => Some(names),
        (None, false) => Some(format!("({})", date)),
        (None, true) => None,
    }
}

fn intext_citation(authors: &[Author], year: &str) -> String {
    match (format_authors(authors, AuthorMode::Intext), year.is_empty()) {
        (Some(names), false) => format!("({}, {})", names, year),
        (Some(names), true) => format!("({})", names),
        (None, false) => format!("({})", year),
        (None, true) => NO_DATE.to_string(),
    }
}

/// Append a period unless the reference already ends with one.
fn end_with_period(mut reference: String) -> String {
    if !reference.ends_with('.') {
        reference.push('.');
    }
    reference
}

/// Drop a dangling comma, then terminate with a period.
fn finish_reference(reference: String) -> String {
    end_with_period(reference.trim_end().trim_end_matches(',').to_string())
}

/// `"City: Publisher"`, or whichever of the two is present.
fn publisher_clause(city: &str, publisher: &str) -> String {
    match (city.is_empty(), publisher.is_empty()) {
        (false, false) => format!("{}: {}", city, publisher),
        (false, true) => city.to_string(),
        _ => publisher.to_string(),
    }
}

/// Comma-join the non-empty values.
fn join_present(values: &[&str]) -> String {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// `value` between `prefix` and `suffix`, or empty when the value is absent.
fn wrap(prefix: &str, value: &str, suffix: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{}{}{}", prefix, value, suffix)
    }
}

/// Personal authors, or the organization standing in as the only author.
fn authors_or_organization(authors: &[Author], organization: &str) -> Vec<Author> {
    if authors.is_empty() && !organization.is_empty() {
        vec![Author::name(organization)]
    } else {
        authors.to_vec()
    }
}

/// Capitalize each word the way a title is cased: a letter is upper-cased
/// when it follows a non-letter and lower-cased otherwise.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for ch in text.chars() {
        if prev_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_cased = ch.is_lowercase() || ch.is_uppercase();
    }
    out
}

pub fn format_book(fields: &BookFields) -> Citation {
    let parts = [
        wrap("", &fields.edition, " edn"),
        publisher_clause(&fields.city, &fields.publisher),
    ];
    let (reference, intext) = build_citation(&fields.authors, &fields.year, &fields.title, &parts);
    Citation::new(SourceType::Book, reference, intext)
}

pub fn format_article(fields: &ArticleFields) -> Citation {
    let journal = wrap("'", &fields.journal, "',");

    let volume_issue = match (fields.volume.is_empty(), fields.issue.is_empty()) {
        (false, false) => format!("{}({}),", fields.volume, fields.issue),
        (false, true) => format!("{},", fields.volume),
        (true, false) => format!("({}),", fields.issue),
        (true, true) => String::new(),
    };

    let pages_doi = format!(
        "{}{}",
        wrap("pp. ", &fields.pages, ""),
        wrap(", doi: ", &fields.doi, "")
    );

    let parts = [journal, volume_issue, pages_doi];
    let title = wrap("", &fields.title, ",");
    let (reference, intext) = build_citation(&fields.authors, &fields.year, &title, &parts);
    Citation::new(SourceType::Article, reference, intext)
}

pub fn format_website(fields: &WebsiteFields) -> Citation {
    let authors = authors_or_organization(&fields.authors, &fields.organization);
    let site = wrap("'", &fields.site_name, "'.");
    let accessed = wrap("(Accessed: ", &fields.accessed, ")");

    let parts = [site, wrap("Available at: ", &fields.url, ""), accessed];
    let title = wrap("", &fields.title, ",");
    let (reference, intext) = build_citation(&authors, &fields.year, &title, &parts);
    Citation::new(SourceType::Website, reference, intext)
}

/// Newspapers lead with the full date but cite only its year in-text.
pub fn format_newspaper(fields: &NewspaperFields) -> Citation {
    let authors = if fields.authors.is_empty() {
        vec![Author::name(ANONYMOUS)]
    } else {
        fields.authors.clone()
    };
    let year = fields.date.split_whitespace().last().unwrap_or("");

    let mut citation_parts: Vec<String> = Vec::new();
    if let Some(lead) = leading_clause(&authors, &fields.date) {
        citation_parts.push(lead);
    }
    if !fields.title.is_empty() {
        citation_parts.push(format!("'{}',", fields.title));
    }

    let masthead = format!(
        "{}{}{}",
        wrap("'", &fields.newspaper, "'"),
        wrap(", ", &fields.edition, ""),
        wrap(", p. ", &fields.pages, "")
    );
    if !masthead.trim().is_empty() {
        citation_parts.push(masthead);
    }

    let reference = finish_reference(citation_parts.join(" "));
    Citation::new(
        SourceType::Newspaper,
        reference,
        intext_citation(&authors, year),
    )
}

pub fn format_conference(fields: &ConferenceFields) -> Citation {
    let venue = join_present(&[
        fields.conference.as_str(),
        fields.location.as_str(),
        fields.dates.as_str(),
    ]);
    let presented = format!(
        "{}{}",
        wrap("paper presented at ", &venue, ""),
        wrap(", pp. ", &fields.pages, "")
    );

    let title = wrap("", &fields.title, ",");
    let (reference, intext) =
        build_citation(&fields.authors, &fields.year, &title, &[presented]);
    Citation::new(SourceType::Conference, reference, intext)
}

pub fn format_thesis(fields: &ThesisFields) -> Citation {
    let award = join_present(&[fields.degree.as_str(), fields.institution.as_str()]);
    let title = wrap("", &fields.title, ",");
    let (reference, intext) = build_citation(&fields.authors, &fields.year, &title, &[award]);
    Citation::new(SourceType::Thesis, reference, intext)
}

pub fn format_report(fields: &ReportFields) -> Citation {
    let authors = authors_or_organization(&fields.authors, &fields.organization);
    let title = format!("{}{}", fields.title, wrap(", ", &fields.report_number, ""));
    let publisher = join_present(&[fields.institution.as_str(), fields.location.as_str()]);
    let (reference, intext) = build_citation(&authors, &fields.year, &title, &[publisher]);
    Citation::new(SourceType::Report, reference, intext)
}

/// Editor clause for a chapter: `"A and B (eds.)"`, or a single editor
/// whose trailing initial period becomes `" (ed.),"`.
fn editors_clause(editors: &[Author]) -> String {
    match editors {
        [] => String::new(),
        [editor] => {
            let name = editor.as_str();
            format!("{} (ed.),", name.strip_suffix('.').unwrap_or(name))
        }
        _ => match format_authors(editors, AuthorMode::Reference) {
            Some(names) => format!("{} (eds.)", names),
            None => String::new(),
        },
    }
}

pub fn format_chapter(fields: &ChapterFields) -> Citation {
    let mut citation_parts: Vec<String> = Vec::new();

    if let Some(lead) = leading_clause(&fields.authors, &fields.year) {
        citation_parts.push(lead);
    }
    if !fields.chapter_title.is_empty() {
        citation_parts.push(format!("'{}', in", fields.chapter_title));
    }
    citation_parts.push(editors_clause(&fields.editors));
    if !fields.book_title.is_empty() {
        citation_parts.push(format!(
            "'{}'{}",
            title_case(&fields.book_title),
            wrap(", ", &fields.edition, " edn")
        ));
    }
    citation_parts.push(publisher_clause(&fields.city, &fields.publisher));
    citation_parts.push(wrap(", pp. ", &fields.pages, ""));

    let joined = citation_parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Citation::new(
        SourceType::Chapter,
        finish_reference(joined),
        intext_citation(&fields.authors, &fields.year),
    )
}
