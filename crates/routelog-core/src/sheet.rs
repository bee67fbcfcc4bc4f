//! The sheet-append collaborator contract and an offline CSV sink.
//!
//! The core never talks to a spreadsheet backend itself; it hands
//! rows to a `SheetAppender`. Appending is unconditional; duplicate
//! prevention and retry are the collaborator's concern.

use crate::error::RouteLogError;
use crate::model::VisitRecord;
use std::io::Write;

/// Column order of the shared visit-tracking sheet.
pub const SHEET_HEADERS: [&str; 5] = ["Stop", "Business Name", "Address", "City", "Notes"];

impl VisitRecord {
    /// Render this record as one sheet row, in `SHEET_HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.stop.to_string(),
            self.business_name.clone(),
            self.address.clone(),
            self.city.clone(),
            self.notes.clone(),
        ]
    }
}

/// Sheet rows for a batch of visits.
pub fn rows_for(visits: &[VisitRecord]) -> Vec<Vec<String>> {
    visits.iter().map(VisitRecord::to_row).collect()
}

/// External collaborator contract: append rows to a named tab,
/// writing headers if the tab has none.
pub trait SheetAppender {
    fn append_rows(
        &mut self,
        tab_name: &str,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), RouteLogError>;
}

/// CSV stand-in for the sheet collaborator: writes headers plus rows
/// to any writer. Tab names do not exist in a flat file and are
/// ignored.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        CsvSink {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> SheetAppender for CsvSink<W> {
    fn append_rows(
        &mut self,
        _tab_name: &str,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), RouteLogError> {
        self.writer.write_record(headers)?;
        for row in rows {
            self.writer.write_record(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
