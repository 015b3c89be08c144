//! Terminal output helpers for the interactive session.
//!
//! Colors are applied through a [`Palette`] so the same rendering code can
//! write plain text to files, pipes and test buffers.

use crate::models::{Citation, SourceType};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Icons shown next to each source type heading.
pub fn source_icon(source_type: SourceType) -> &'static str {
    match source_type {
        SourceType::Book => "📚",
        SourceType::Article => "📄",
        SourceType::Website => "🌐",
        SourceType::Newspaper => "📰",
        SourceType::Conference => "🎤",
        SourceType::Thesis => "🎓",
        SourceType::Report => "📊",
        SourceType::Chapter => "📖",
    }
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
}

/// Status icons for different outcomes.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
    }
}

/// How the "view all" listing is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Numbered entries with indented reference and in-text lines
    #[default]
    Plain,
    /// Bordered table
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Optional coloring of output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that colors only when `enabled` is set
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never colors
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Bold cyan heading
    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    /// Bold label such as `REFERENCE:`
    pub fn label(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dimmed secondary text
    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Message prefixed by a status icon when colors are on.
    ///
    /// Without colors the message is returned unchanged so transcripts stay
    /// stable.
    pub fn status(&self, status: Status, msg: &str) -> String {
        if !self.enabled {
            return msg.to_string();
        }
        let icon = status_icon(status);
        match status {
            Status::Success => format!("{} {}", icon.green().bold(), msg),
            Status::Error => format!("{} {}", icon.red().bold(), msg.red()),
            Status::Warning => format!("{} {}", icon.yellow().bold(), msg),
            Status::Info => format!("{} {}", icon.cyan().bold(), msg),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(is_terminal())
    }
}

/// Render every citation of the session in the requested format.
pub fn render_citations(
    citations: &[Citation],
    format: ListFormat,
    palette: Palette,
) -> String {
    match format {
        ListFormat::Plain => {
            let mut out = String::new();
            out.push_str(&format!("\n{}\n", "=".repeat(50)));
            out.push_str(&palette.heading("ALL CITATIONS"));
            out.push('\n');
            for (i, citation) in citations.iter().enumerate() {
                out.push_str(&format!(
                    "\n{}. {}:\n   {}\n   {}\n",
                    i + 1,
                    palette.label(citation.source_type.name()),
                    citation.reference,
                    palette.dim(&citation.intext)
                ));
            }
            out
        }
        ListFormat::Table => {
            use comfy_table::{Attribute, Cell, ContentArrangement, Table};
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", "Type", "Reference", "In-text"]);

            for (i, citation) in citations.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(citation.source_type.name()).add_attribute(Attribute::Bold),
                    Cell::new(&citation.reference),
                    Cell::new(&citation.intext),
                ]);
            }
            format!("\n{table}\n")
        }
        ListFormat::Json => match serde_json::to_string_pretty(citations) {
            Ok(json) => format!("{}\n", json),
            Err(e) => format!("Error: {}\n", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Citation> {
        vec![
            Citation::new(
                SourceType::Book,
                "Smith, J. (2020) 'Systems Design' London: Acme Press.".to_string(),
                "(Smith, J., 2020)".to_string(),
            ),
            Citation::new(SourceType::Thesis, ".".to_string(), "(n.d.)".to_string()),
        ]
    }

    #[test]
    fn test_source_icon() {
        assert_eq!(source_icon(SourceType::Book), "📚");
        assert_eq!(source_icon(SourceType::Newspaper), "📰");
    }

    #[test]
    fn test_status_icon() {
        assert_eq!(status_icon(Status::Success), "✓");
        assert_eq!(status_icon(Status::Error), "✗");
    }

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.heading("ALL"), "ALL");
        assert_eq!(palette.status(Status::Error, "Invalid choice"), "Invalid choice");
    }

    #[test]
    fn test_colored_palette_adds_escapes() {
        let palette = Palette::new(true);
        assert!(palette.heading("ALL").contains("\u{1b}["));
        assert!(palette.status(Status::Success, "ok").contains("✓"));
    }

    #[test]
    fn test_render_plain() {
        let out = render_citations(&sample(), ListFormat::Plain, Palette::plain());
        assert!(out.contains("ALL CITATIONS"));
        assert!(out.contains("\n1. Book:\n   Smith, J. (2020) 'Systems Design' London: Acme Press.\n   (Smith, J., 2020)\n"));
        assert!(out.contains("\n2. Thesis:\n   .\n   (n.d.)\n"));
    }

    #[test]
    fn test_render_table() {
        let out = render_citations(&sample(), ListFormat::Table, Palette::plain());
        assert!(out.contains("Reference"));
        assert!(out.contains("Thesis"));
    }

    #[test]
    fn test_render_json() {
        let out = render_citations(&sample(), ListFormat::Json, Palette::plain());
        let parsed: Vec<Citation> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
        assert!(out.contains("\"source_type\": \"book\""));
    }
}
