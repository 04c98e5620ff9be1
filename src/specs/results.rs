// src/specs/results.rs
//! Race-result pages.
//!
//! Rows: every `<tr>` under the document's second `<tbody>`.
//! Columns (positional, by direct child element of the row):
//! Bib, Name, Sex, Age, Location, Net, Clock, Pace, Event
//!
//! Cell values are taken raw: one child node of the cell, no trimming.
//! Some name cells start with an icon (`<img>`) before the text, so the name
//! column takes the second child node when there is more than one.

use scraper::ElementRef;
use tracing::debug;

use crate::config::consts::RESULTS_TBODY;
use crate::core::html::{self, child_count, child_elements, child_text};
use crate::error::{Error, Result};

pub type Record = Vec<String>;

/// Which child node of a cell carries the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickRule {
    /// Always the first child.
    First,
    /// The second child if there are at least two, else the first.
    SecondIfMany,
}

impl PickRule {
    /// Index of the child to read out of `len` children, `None` when empty.
    pub fn pick(self, len: usize) -> Option<usize> {
        match (self, len) {
            (_, 0) => None,
            (PickRule::SecondIfMany, n) if n > 1 => Some(1),
            _ => Some(0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Bib,
    Name,
    Sex,
    Age,
    Location,
    Net,
    Clock,
    Pace,
    Event,
}

impl Column {
    /// Output order, which is also the cell order on the page.
    pub const ALL: [Column; 9] = [
        Column::Bib,
        Column::Name,
        Column::Sex,
        Column::Age,
        Column::Location,
        Column::Net,
        Column::Clock,
        Column::Pace,
        Column::Event,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Bib => "bib",
            Column::Name => "name",
            Column::Sex => "sex",
            Column::Age => "age",
            Column::Location => "location",
            Column::Net => "net",
            Column::Clock => "clock",
            Column::Pace => "pace",
            Column::Event => "event",
        }
    }

    /// Keyed on the column alone, never on cell content.
    pub fn rule(self) -> PickRule {
        match self {
            Column::Name => PickRule::SecondIfMany,
            _ => PickRule::First,
        }
    }
}

pub fn headers() -> Vec<String> {
    Column::ALL.iter().map(|c| s!(c.header())).collect()
}

/// Value of one column for one row, or `None` if the row has no such cell.
pub fn simplify_td(row: ElementRef<'_>, column: Column) -> Option<String> {
    let cell = child_elements(row).nth(column.index())?;
    Some(cell_value(cell, column))
}

fn cell_value(cell: ElementRef<'_>, column: Column) -> String {
    column
        .rule()
        .pick(child_count(cell))
        .and_then(|i| child_text(cell, i))
        .unwrap_or_default()
}

/// All nine fields of a row. `row_no` (1-based) is only used for errors.
pub fn extract_record(row: ElementRef<'_>, row_no: usize) -> Result<Record> {
    let cells = child_elements(row).count();
    if cells < Column::ALL.len() {
        return Err(Error::ShortRow {
            path: Default::default(),
            row: row_no,
            cells,
            needed: Column::ALL.len(),
        });
    }
    Ok(Column::ALL
        .iter()
        .map(|&c| simplify_td(row, c).unwrap_or_default())
        .collect())
}

/// Walk the result rows of one document, handing each record to `sink` as
/// soon as it is built. Returns the number of records produced.
///
/// Stops at the first error: a missing results table, a short row, or
/// whatever `sink` returns.
pub fn for_each_record<F>(html_doc: &str, mut sink: F) -> Result<usize>
where
    F: FnMut(Record) -> Result<()>,
{
    let doc = html::parse_document(html_doc);
    let tbody = html::nth_tbody(&doc, RESULTS_TBODY)?;

    let mut n = 0usize;
    for row in html::rows(tbody) {
        n += 1;
        sink(extract_record(row, n)?)?;
    }
    debug!(rows = n, "extracted result rows");
    Ok(n)
}

/// Collecting variant of [`for_each_record`], for tests and benches.
pub fn parse_doc(html_doc: &str) -> Result<Vec<Record>> {
    let mut out = Vec::new();
    for_each_record(html_doc, |rec| {
        out.push(rec);
        Ok(())
    })?;
    Ok(out)
}
