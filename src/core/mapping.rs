use crate::domain::model::{InventoryRecord, SeriesStats};
use crate::utils::error::Result;
use chrono::Utc;
use serde_json::Value;

/// Flattens a fetched inventory document into an [`InventoryRecord`].
///
/// The document is untrusted: any missing, `null`, or wrong-typed
/// substructure is treated as empty, and every leaf lookup carries a typed
/// default, so this never fails on shape alone. The only fallible step is
/// re-encoding the two opaque arrays back to JSON text.
pub fn map_document(doc: &Value, import_url: &str) -> Result<InventoryRecord> {
    let inventory = doc.get("inventory");
    let aggregates = doc.get("aggregates");
    let numbers = aggregates.and_then(|a| a.get("numbers"));
    let popular_text = aggregates.and_then(|a| a.get("popularText"));
    let field_defs = doc.get("fields");

    let num1 = series_stats(numbers, "num1");
    let num2 = series_stats(numbers, "num2");
    let num3 = series_stats(numbers, "num3");

    Ok(InventoryRecord {
        title: string_or_empty(inventory, "title"),
        description: string_or_empty(inventory, "description"),
        import_url: import_url.to_string(),
        num1_min: num1.min,
        num1_med: num1.median,
        num1_avg: num1.avg,
        num1_max: num1.max,
        num2_min: num2.min,
        num2_med: num2.median,
        num2_avg: num2.avg,
        num2_max: num2.max,
        num3_min: num3.min,
        num3_med: num3.median,
        num3_avg: num3.avg,
        num3_max: num3.max,
        popular_text_json: pretty_array(popular_text)?,
        fields_json: pretty_array(field_defs)?,
        imported_at: Utc::now(),
    })
}

/// Statistics for one series under `aggregates.numbers`.
///
/// Absent, `null`, and non-numeric leaves all collapse to `0.0`, which makes
/// them indistinguishable from a true zero reading. Deliberate; see DESIGN.md.
pub fn series_stats(numbers: Option<&Value>, series: &str) -> SeriesStats {
    let entry = numbers.and_then(|n| n.get(series));
    SeriesStats {
        min: stat_or_zero(entry, "min"),
        median: stat_or_zero(entry, "median"),
        avg: stat_or_zero(entry, "avg"),
        max: stat_or_zero(entry, "max"),
    }
}

fn stat_or_zero(entry: Option<&Value>, stat: &str) -> f64 {
    entry
        .and_then(|e| e.get(stat))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

fn string_or_empty(obj: Option<&Value>, key: &str) -> String {
    obj.and_then(|o| o.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Re-encodes an opaque array as pretty JSON text (2-space indent, non-ASCII
/// characters kept literal). Anything that is not an array serializes as `[]`.
fn pretty_array(value: Option<&Value>) -> Result<String> {
    match value.and_then(Value::as_array) {
        Some(items) => Ok(serde_json::to_string_pretty(items)?),
        None => Ok("[]".to_string()),
    }
}
