use log::debug;

use crate::error::StatsError;
use crate::page::{escape, Document};
use crate::stats::{Record, Value};

/// Stable ascending sort of `records` on the value stored under `key`.
///
/// Every record is checked before anything moves, so on error the slice keeps its input
/// order. On success the previous order is gone; callers that need it should sort a clone.
pub fn sort_by_key(records: &mut [Record], key: &str) -> Result<(), StatsError> {
    let mut text = false;
    let mut numeric = false;
    for record in records.iter() {
        match record.get(key) {
            Some(Value::Text(_)) => text = true,
            Some(Value::Float(v)) if !v.is_finite() => {
                return Err(StatsError::NonFiniteValue {
                    key: key.to_string(),
                    framework: record.framework.clone(),
                })
            }
            Some(_) => numeric = true,
            None => return Err(StatsError::missing(key, &record.framework)),
        }
    }
    if text && numeric {
        return Err(StatsError::IncomparableValues {
            key: key.to_string(),
        });
    }

    records.sort_by(|a, b| match (a.get(key), b.get(key)) {
        (Some(a), Some(b)) => a.total_cmp(b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    });
    Ok(())
}

/// `round(100 * value / max_value)`, half away from zero.
pub fn percentage_of(value: f64, max_value: f64) -> Result<i64, StatsError> {
    if max_value == 0.0 {
        return Err(StatsError::DivisionByZero);
    }
    Ok((100.0 * value / max_value).round() as i64)
}

pub(crate) fn numeric_value(record: &Record, key: &str) -> Result<f64, StatsError> {
    let value = record
        .get(key)
        .ok_or_else(|| StatsError::missing(key, &record.framework))?;
    value.as_f64().ok_or_else(|| StatsError::NonNumericField {
        key: key.to_string(),
        framework: record.framework.clone(),
    })
}

/// Sorts `records` by `key` and builds the stats table markup, one row per record with its
/// bar scaled against the largest value.
pub fn render_table(records: &mut [Record], key: &str, unit: &str) -> Result<String, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    sort_by_key(records, key)?;

    let highest = match records.last() {
        Some(last) => numeric_value(last, key)?,
        None => return Err(StatsError::EmptyInput),
    };

    let unit = escape(unit);
    let mut table = String::from(r#"<table class="stats-table"><tbody>"#);
    for entry in records.iter() {
        let percentage = percentage_of(numeric_value(entry, key)?, highest)?;
        table.push_str(&format!(
            concat!(
                r#"<tr class="stats-row">"#,
                "<td>{framework}</td>",
                r#"<td><div class="percentage-bar-container">"#,
                r#"<div class="percentage-bar" style="width:{percentage}%;"></div>"#,
                "</div></td>",
                "<td>{value}{unit}</td>",
                "</tr>"
            ),
            framework = escape(&entry.framework),
            percentage = percentage,
            value = entry.get(key).map(Value::to_string).unwrap_or_default(),
            unit = unit,
        ));
    }
    table.push_str("</tbody></table>");

    debug!("rendered {} rows for `{}` (max {})", records.len(), key, highest);
    Ok(table)
}

/// Renders the table and commits it to `mount_id`. Nothing is written when rendering fails.
pub fn draw_table<D: Document>(
    records: &mut [Record],
    key: &str,
    mount_id: &str,
    unit: &str,
    document: &mut D,
) -> Result<(), StatsError> {
    let markup = render_table(records, key, unit)?;
    document.commit_to_element(mount_id, &markup)
}
