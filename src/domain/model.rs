use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type RecordId = i64;

/// Derived statistics for one numeric series, as computed upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub min: f64,
    pub median: f64,
    pub avg: f64,
    pub max: f64,
}

/// One imported inventory, flattened for persistence.
///
/// The twelve numeric fields are the flat storage shape (three series, four
/// statistics each); `SeriesStats` is the structured form used while mapping. A record is created exactly once per successful
/// import and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub title: String,
    pub description: String,
    /// Exact URL the document was fetched from, kept for provenance.
    pub import_url: String,

    pub num1_min: f64,
    pub num1_med: f64,
    pub num1_avg: f64,
    pub num1_max: f64,
    pub num2_min: f64,
    pub num2_med: f64,
    pub num2_avg: f64,
    pub num2_max: f64,
    pub num3_min: f64,
    pub num3_med: f64,
    pub num3_avg: f64,
    pub num3_max: f64,

    /// `aggregates.popularText` re-encoded as pretty JSON text, opaque to us.
    pub popular_text_json: String,
    /// `fields` re-encoded as pretty JSON text, opaque to us.
    pub fields_json: String,

    pub imported_at: DateTime<Utc>,
}
