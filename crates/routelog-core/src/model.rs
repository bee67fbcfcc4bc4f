use serde::{Deserialize, Serialize};
use std::fmt;

/// One visit on a route manifest: a single row of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Sequence position on the route, renumbered 1..N in encountered order.
    pub stop: u32,
    /// Inferred facility name; the inference chain is total, so never blank.
    pub business_name: String,
    /// Street-level location, trimmed of stop-number and city fragments.
    pub address: String,
    pub city: String,
    /// Free text from the stop's remaining lines; empty when none.
    pub notes: String,
}

impl fmt::Display for VisitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - {}, {}",
            self.stop, self.business_name, self.address, self.city
        )
    }
}

/// Why a segmented block produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// The stop token on the block's first line is not a number.
    UnparseableStopToken,
    /// No address or name content survived field extraction.
    NoUsableContent,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::UnparseableStopToken => write!(f, "unparseable stop token"),
            DropReason::NoUsableContent => write!(f, "no usable address or name content"),
        }
    }
}

/// A non-fatal anomaly: the block was skipped, parsing continued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    pub reason: DropReason,
    /// The stop-start line that opened the dropped block.
    pub line: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dropped block '{}': {}", self.line, self.reason)
    }
}

/// Result of parsing one document.
///
/// A document with zero recognizable stop-start lines parses to an
/// empty `visits`; callers decide whether that is worth reporting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedRoute {
    pub visits: Vec<VisitRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
    /// Stop-start lines recognized in the input, including dropped ones.
    pub stop_lines_seen: usize,
}

impl ParsedRoute {
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}
