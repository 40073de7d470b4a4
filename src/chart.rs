use log::info;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;

use crate::error::StatsError;
use crate::stats::Record;
use crate::stats_table::{numeric_value, sort_by_key};

const FONT: &str = "sans-serif";
const PLOT_WIDTH: u32 = 800;
const ROW_HEIGHT: u32 = 32;
const BAR_COLOR: RGBColor = RGBColor(59, 130, 246);

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for StatsError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        StatsError::Chart(err.to_string())
    }
}

/// One bar per record, ascending like the table, with labels on the left and the raw
/// value plus `unit` at the end of each bar.
pub fn write_bar_chart(
    records: &mut [Record],
    key: &str,
    unit: &str,
    caption: &str,
    path: impl AsRef<Path>,
) -> Result<(), StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    sort_by_key(records, key)?;

    let mut bars = Vec::with_capacity(records.len());
    for record in records.iter() {
        bars.push((record.framework.as_str(), numeric_value(record, key)?));
    }
    let x_max = bars.last().map(|(_, v)| *v).unwrap_or_default();
    if x_max == 0.0 {
        return Err(StatsError::DivisionByZero);
    }

    let path = path.as_ref();
    let rows = bars.len() as i32;
    let resolution = (PLOT_WIDTH, 80 + ROW_HEIGHT * bars.len() as u32);
    let root = SVGBackend::new(path, resolution).into_drawing_area();

    root.fill(&WHITE)?;

    let x_min = bars.first().map(|(_, v)| *v).unwrap_or_default();
    let x_lo = x_min.min(0.0) * 1.15;
    let x_hi = x_max.max(0.0) * 1.15;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(caption, (FONT, 20))
        .set_label_area_size(LabelAreaPosition::Left, 110)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_lo..x_hi, 0..rows)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(bars.len() + 1)
        .y_label_formatter(&|y| {
            bars.get(*y as usize)
                .map(|(name, _)| name.to_string())
                .unwrap_or_default()
        })
        .x_label_formatter(&|v| format!("{:.0}{}", v, unit))
        .x_desc(unit)
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, (_, value))| {
        let i = i as i32;
        Rectangle::new([(0.0, i), (*value, i + 1)], BAR_COLOR.filled())
    }))?;

    chart.draw_series(bars.iter().enumerate().map(|(i, (_, value))| {
        Text::new(
            format!("{}{}", value, unit),
            (*value, i as i32 + 1),
            (FONT, 13).into_font(),
        )
    }))?;

    root.present()?;
    info!("wrote chart {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats_data::FRAMEWORK_STATS;

    #[test]
    fn writes_svg_with_every_framework_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("size.svg");
        let mut records = FRAMEWORK_STATS.clone();
        write_bar_chart(&mut records, "size", "kb", "Bundle size", &path).unwrap();

        assert!(path.exists());
        let svg = std::fs::read_to_string(&path).unwrap();
        for record in FRAMEWORK_STATS.iter() {
            assert!(svg.contains(&record.framework), "{} not in chart", record.framework);
        }
        assert_eq!(records[0].framework, "vanillajs");
        for pair in records.windows(2) {
            assert!(numeric_value(&pair[0], "size").unwrap() <= numeric_value(&pair[1], "size").unwrap());
        }
    }

    #[test]
    fn negative_values_stay_on_the_axis() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delta.svg");
        let mut records = vec![
            Record::new("riot").with("delta", 12),
            Record::new("react").with("delta", -30),
            Record::new("svelte").with("delta", 4.5),
        ];
        write_bar_chart(&mut records, "delta", "", "Delta", &path).unwrap();
        assert!(path.exists());
        assert_eq!(records[0].framework, "react");
    }

    #[test]
    fn empty_and_zero_inputs_do_not_draw() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.svg");
        let mut empty: Vec<Record> = Vec::new();
        assert!(matches!(
            write_bar_chart(&mut empty, "size", "", "x", &path),
            Err(StatsError::EmptyInput)
        ));
        let mut zeros = vec![Record::new("a").with("size", 0)];
        assert!(matches!(
            write_bar_chart(&mut zeros, "size", "", "x", &path),
            Err(StatsError::DivisionByZero)
        ));
        let mut text = vec![Record::new("a").with("size", "big")];
        assert!(matches!(
            write_bar_chart(&mut text, "size", "", "x", &path),
            Err(StatsError::NonNumericField { .. })
        ));
        assert!(!path.exists());
    }
}
