use std::collections::BTreeMap;

use crate::error::StatsError;
use crate::page::{escape, Document};

/// How well a framework supports one checklist item, on a 0, 1, 2 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckLevel {
    No,
    Partial,
    Full,
}

impl CheckLevel {
    fn class(self) -> &'static str {
        match self {
            CheckLevel::No => "check-no",
            CheckLevel::Partial => "check-partial",
            CheckLevel::Full => "check-full",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            CheckLevel::No => "✗",
            CheckLevel::Partial => "◐",
            CheckLevel::Full => "✓",
        }
    }
}

impl TryFrom<i64> for CheckLevel {
    type Error = StatsError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(CheckLevel::No),
            1 => Ok(CheckLevel::Partial),
            2 => Ok(CheckLevel::Full),
            other => Err(StatsError::InvalidCheckLevel(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkChecks {
    pub framework: String,
    pub checks: BTreeMap<String, CheckLevel>,
}

/// Builds the checklist table: a header row of items, then one row per framework in input
/// order.
pub fn render_check_table(items: &[String], rows: &[FrameworkChecks]) -> Result<String, StatsError> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut table = String::from(r#"<table class="stats-table check-table"><thead><tr><th></th>"#);
    for item in items {
        table.push_str(&format!("<th>{}</th>", escape(item)));
    }
    table.push_str("</tr></thead><tbody>");

    for entry in rows {
        table.push_str(&format!(r#"<tr class="stats-row"><td>{}</td>"#, escape(&entry.framework)));
        for item in items {
            let level = entry
                .checks
                .get(item)
                .ok_or_else(|| StatsError::missing(item, &entry.framework))?;
            table.push_str(&format!(
                r#"<td class="check-cell {}">{}</td>"#,
                level.class(),
                level.symbol()
            ));
        }
        table.push_str("</tr>");
    }
    table.push_str("</tbody></table>");
    Ok(table)
}

pub fn draw_check_table<D: Document>(
    items: &[String],
    rows: &[FrameworkChecks],
    mount_id: &str,
    document: &mut D,
) -> Result<(), StatsError> {
    let markup = render_check_table(items, rows)?;
    document.commit_to_element(mount_id, &markup)
}
