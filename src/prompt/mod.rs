//! Interactive collection of citation field values.
//!
//! [`Prompter`] reads answers line by line from any [`BufRead`] and writes its
//! questions to any [`Write`], so sessions can be driven from a terminal or
//! from a script in tests. Answers are trimmed; a blank answer leaves the
//! field empty.

mod collect;

pub use collect::collect_record;

use crate::models::Author;
use crate::utils::{resolve_date, validate_year};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors raised while reading answers
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("end of input")]
    EndOfInput,
}

/// Question-and-answer driver over a reader/writer pair
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    require_author: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter.
    ///
    /// With `require_author` set, an author list cannot be finished empty.
    pub fn new(input: R, output: W, require_author: bool) -> Self {
        Self {
            input,
            output,
            require_author,
        }
    }

    /// Writer the prompts go to, for surrounding output
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask a question and return the trimmed answer
    pub fn text(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Ask for authors until a blank surname is entered
    pub fn authors(&mut self) -> Result<Vec<Author>, PromptError> {
        self.author_list(self.require_author)
    }

    /// Ask for book editors; an empty list is always accepted
    pub fn editors(&mut self) -> Result<Vec<Author>, PromptError> {
        writeln!(self.output, "\nBook editor information:")?;
        self.author_list(false)
    }

    fn author_list(&mut self, required: bool) -> Result<Vec<Author>, PromptError> {
        let mut authors = Vec::new();
        writeln!(self.output, "\nEnter author information:")?;

        loop {
            let surname = self.text("Enter author's last name (or press Enter to finish)")?;
            if surname.is_empty() {
                if required && authors.is_empty() {
                    writeln!(self.output, "Please enter at least one author.")?;
                    continue;
                }
                break;
            }
            let first_name = self.text("Enter author's first name")?;
            authors.push(Author::person(&surname, &first_name));
        }

        Ok(authors)
    }

    /// Ask for a publication year until it is blank or four digits
    pub fn year(&mut self) -> Result<String, PromptError> {
        loop {
            let answer = self.text("Publication year")?;
            match validate_year(&answer) {
                Ok(year) => return Ok(year.unwrap_or_default()),
                Err(e) => {
                    tracing::debug!("Rejected year input: {}", e);
                    writeln!(
                        self.output,
                        "Please enter a valid 4-digit year or press Enter to skip."
                    )?;
                }
            }
        }
    }

    /// Ask for a publication date; month and day are only asked after a year
    pub fn date(&mut self) -> Result<String, PromptError> {
        let year = self.year()?;
        if year.is_empty() {
            return Ok(String::new());
        }
        let month = self.text("Publication month")?;
        let day = self.text("Publication day")?;
        Ok(resolve_date(&year, &month, &day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(script: &str, require_author: bool) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(script.as_bytes(), Vec::new(), require_author)
    }

    #[test]
    fn test_text_trims_answer() {
        let mut p = prompter("  Systems Design  \n", false);
        assert_eq!(p.text("Book title").unwrap(), "Systems Design");
        assert_eq!(String::from_utf8_lossy(p.output()), "Book title: ");
    }

    #[test]
    fn test_text_end_of_input() {
        let mut p = prompter("", false);
        assert!(matches!(p.text("Title"), Err(PromptError::EndOfInput)));
    }

    #[test]
    fn test_authors_loop() {
        let mut p = prompter("Smith\njohn\nWHO\n\n\n", false);
        let authors = p.authors().unwrap();
        assert_eq!(
            authors,
            vec![Author::person("Smith", "John"), Author::name("WHO")]
        );
    }

    #[test]
    fn test_authors_may_be_empty() {
        let mut p = prompter("\n", false);
        assert!(p.authors().unwrap().is_empty());
    }

    #[test]
    fn test_authors_required() {
        let mut p = prompter("\nLee\nAnn\n\n", true);
        assert_eq!(p.authors().unwrap(), vec![Author::person("Lee", "A")]);
        let out = String::from_utf8_lossy(p.output()).to_string();
        assert!(out.contains("Please enter at least one author."));
    }

    #[test]
    fn test_editors_never_required() {
        let mut p = prompter("\n", true);
        assert!(p.editors().unwrap().is_empty());
    }

    #[test]
    fn test_year_reprompts_until_valid() {
        let mut p = prompter("20\nabcd\n2019\n", false);
        assert_eq!(p.year().unwrap(), "2019");
        let out = String::from_utf8_lossy(p.output()).to_string();
        assert_eq!(
            out.matches("Please enter a valid 4-digit year").count(),
            2
        );
    }

    #[test]
    fn test_year_skip() {
        let mut p = prompter("\n", false);
        assert_eq!(p.year().unwrap(), "");
    }

    #[test]
    fn test_date_full_and_partial() {
        let mut p = prompter("2021\nMay\n5\n", false);
        assert_eq!(p.date().unwrap(), "5 May 2021");

        let mut p = prompter("2021\n\n5\n", false);
        assert_eq!(p.date().unwrap(), "2021");

        let mut p = prompter("\n", false);
        assert_eq!(p.date().unwrap(), "");
    }
}
