//! The interactive menu loop.
//!
//! Menu entries 1-8 create one citation each, 9 lists every citation of the
//! session and 10 quits. A failure while building one citation is reported
//! and the loop carries on; only an explicit exit or the end of input stops
//! the session.

use crate::models::{Citation, SourceType};
use crate::prompt::{collect_record, PromptError, Prompter};
use crate::ui::{render_citations, source_icon, ListFormat, Palette, Status};
use crate::utils::{format_record, CitationLog};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Create a citation of the given type (entries 1-8)
    Create(SourceType),
    /// List all citations created this session (entry 9)
    ViewAll,
    /// Leave the session (entry 10)
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n @ 1..=8) => Ok(MenuChoice::Create(SourceType::ALL[n - 1])),
            Ok(9) => Ok(MenuChoice::ViewAll),
            Ok(10) => Ok(MenuChoice::Exit),
            _ => Err(format!("Invalid menu choice: {}", s.trim())),
        }
    }
}

/// Settings for one interactive session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Log appended to after every citation; `None` disables logging
    pub log: Option<CitationLog>,
    /// Refuse to finish an author list empty
    pub require_author: bool,
    /// Rendering of the "view all" listing
    pub list_format: ListFormat,
    /// Output coloring
    pub palette: Palette,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            log: Some(CitationLog::default()),
            require_author: false,
            list_format: ListFormat::Plain,
            palette: Palette::plain(),
        }
    }
}

/// Interactive citation session
#[derive(Debug)]
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    log: Option<CitationLog>,
    list_format: ListFormat,
    palette: Palette,
    citations: Vec<Citation>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading answers from `input` and writing to `output`
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            prompter: Prompter::new(input, output, options.require_author),
            log: options.log,
            list_format: options.list_format,
            palette: options.palette,
            citations: Vec::new(),
        }
    }

    /// Citations created so far, oldest first
    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Returns an error only when the output itself cannot be written.
    pub fn run(&mut self) -> Result<(), PromptError> {
        self.print_banner()?;

        loop {
            self.print_menu()?;
            let answer = match self.prompter.text("\nChoose") {
                Ok(answer) => answer,
                Err(PromptError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            match answer.parse::<MenuChoice>() {
                Ok(MenuChoice::Create(source_type)) => match self.create(source_type) {
                    Ok(()) => {}
                    Err(PromptError::EndOfInput) => break,
                    Err(e) => {
                        tracing::warn!("Citation aborted: {}", e);
                        let msg = self.palette.status(Status::Error, &format!("Error: {}", e));
                        writeln!(self.prompter.output(), "{}", msg)?;
                    }
                },
                Ok(MenuChoice::ViewAll) => self.view_all()?,
                Ok(MenuChoice::Exit) => break,
                Err(e) => {
                    tracing::debug!("{}", e);
                    let msg = self.palette.status(Status::Warning, "Invalid choice");
                    writeln!(self.prompter.output(), "{}", msg)?;
                }
            }
        }

        self.print_farewell()
    }

    /// Collect, format, record and log one citation
    fn create(&mut self, source_type: SourceType) -> Result<(), PromptError> {
        let heading = format!("{} {}", source_icon(source_type), source_type.name());
        let heading = self.palette.heading(&heading);
        writeln!(self.prompter.output(), "\n{}", heading)?;

        let record = collect_record(&mut self.prompter, source_type)?;
        let citation = format_record(&record);
        self.citations.push(citation.clone());

        let out = self.prompter.output();
        writeln!(out, "\n{}", "=".repeat(40))?;
        writeln!(out, "{}", self.palette.label("REFERENCE:"))?;
        writeln!(out, "{}", citation.reference)?;
        writeln!(out, "\n{}", self.palette.label("IN-TEXT:"))?;
        writeln!(out, "{}", citation.intext)?;

        if let Some(log) = &self.log {
            match log.append(&citation) {
                Ok(path) => {
                    let msg = format!("Saved to {}", path.display());
                    writeln!(out, "\n{}", self.palette.status(Status::Success, &msg))?;
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    let msg = format!("Error: {}", e);
                    writeln!(out, "\n{}", self.palette.status(Status::Error, &msg))?;
                }
            }
        }

        Ok(())
    }

    fn view_all(&mut self) -> Result<(), PromptError> {
        let out = self.prompter.output();
        if self.citations.is_empty() {
            writeln!(out, "\nNo citations yet.")?;
        } else {
            let listing = render_citations(&self.citations, self.list_format, self.palette);
            write!(out, "{}", listing)?;
        }
        Ok(())
    }

    fn print_banner(&mut self) -> Result<(), PromptError> {
        let title = self.palette.heading("Harvard Citation Generator");
        let out = self.prompter.output();
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", "=".repeat(40))?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), PromptError> {
        let out = self.prompter.output();
        writeln!(out, "\nSource types:")?;
        for (i, source_type) in SourceType::ALL.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, source_type.name())?;
        }
        writeln!(out, "9. View All")?;
        writeln!(out, "10. Exit")?;
        Ok(())
    }

    fn print_farewell(&mut self) -> Result<(), PromptError> {
        let count = self.citations.len();
        let out = self.prompter.output();
        if count > 0 {
            writeln!(out, "\nGenerated {} citations", count)?;
        }
        writeln!(out, "Goodbye!")?;
        out.flush()?;
        Ok(())
    }
}
