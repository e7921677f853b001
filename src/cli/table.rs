//! Text and JSON renderings of the catalog table

use clap::ValueEnum;
use tabled::{settings::Style, Table, Tabled};

use crate::catalog::BookRecord;
use crate::config::TableStyle;
use crate::Result;

/// Output format for `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "S.No")]
    sequence_number: u32,
    #[tabled(rename = "Book Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Year of Publishing")]
    year_of_publication: String,
    #[tabled(rename = "ISBN")]
    isbn: String,
}

impl From<&BookRecord> for Row {
    fn from(record: &BookRecord) -> Self {
        Self {
            sequence_number: record.sequence_number(),
            title: record.title.clone(),
            author: record.author.clone(),
            genre: record.genre.clone(),
            year_of_publication: record.year_of_publication.clone(),
            isbn: record.isbn.clone(),
        }
    }
}

/// Render records as a bordered text table
pub fn render_text(records: &[BookRecord], style: TableStyle) -> String {
    let mut table = Table::new(records.iter().map(Row::from));
    match style {
        TableStyle::Rounded => table.with(Style::rounded()),
        TableStyle::Ascii => table.with(Style::ascii()),
        TableStyle::Markdown => table.with(Style::markdown()),
    };
    table.to_string()
}

/// Render records as a pretty-printed JSON array
pub fn render_json(records: &[BookRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render in the requested format
pub fn render(records: &[BookRecord], format: OutputFormat, style: TableStyle) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(records, style)),
        OutputFormat::Json => render_json(records),
    }
}
