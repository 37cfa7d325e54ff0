//! Chart export to CSV
//!
//! Reads the renderer's chart snapshot and hands a `Label,Value` CSV to the
//! page's download path as `chart_<date>.csv`.

use std::fmt::Write as _;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::chart::ChartData;
use crate::dom::Dom;
use crate::error::{DashboardError, Result};
use crate::render::Renderer;

pub const NO_DATA_ALERT: &str = "Geen gegevens beschikbaar om te exporteren.";
pub const EMPTY_DATA_ALERT: &str = "Geen gegevens beschikbaar voor export.";
pub const EXPORT_FAILED_ALERT: &str = "Exporteren van de grafiek is mislukt.";
pub const CSV_MIME: &str = "text/csv";

/// `Label,Value` header, then one row per label/value pair
pub fn to_csv(data: &ChartData) -> String {
    let mut csv = String::from("Label,Value\n");
    for (label, value) in data.labels.iter().zip(&data.values) {
        let _ = writeln!(csv, "{label},{value}");
    }
    csv
}

/// Download name for an export made on `date`
pub fn file_name(date: NaiveDate) -> String {
    format!("chart_{}.csv", date.format("%Y-%m-%d"))
}

/// Export the current chart, dated `date`
///
/// With no chart or an empty one, alerts and returns
/// [`DashboardError::NoChartData`] before any download starts. A download
/// the page refuses is alerted too.
/// Returns the download's file name.
pub fn export_chart<D: Dom>(renderer: &Renderer<D>, date: NaiveDate) -> Result<String> {
    let Some(data) = renderer.chart_snapshot() else {
        renderer.dom().alert(NO_DATA_ALERT);
        return Err(DashboardError::NoChartData);
    };
    if data.is_empty() {
        renderer.dom().alert(EMPTY_DATA_ALERT);
        return Err(DashboardError::NoChartData);
    }

    let name = file_name(date);
    if let Err(e) = renderer.dom().download(&name, CSV_MIME, &to_csv(&data)) {
        warn!(file = %name, error = %e, "⚠️ Chart export failed");
        renderer.dom().alert(EXPORT_FAILED_ALERT);
        return Err(e);
    }
    info!(file = %name, rows = data.labels.len(), "💾 Chart exported");
    Ok(name)
}

/// Export the current chart, dated with the local calendar day
pub fn export_chart_today<D: Dom>(renderer: &Renderer<D>) -> Result<String> {
    export_chart(renderer, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDom, ids};
    use crate::types::GraphTotals;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
    }

    #[test]
    fn test_csv_exact_output() {
        let data = ChartData {
            labels: vec!["Winsten".to_string(), "Stortingen".to_string()],
            values: vec![120.0, 50.0],
        };
        assert_eq!(to_csv(&data), "Label,Value\nWinsten,120\nStortingen,50\n");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(date()), "chart_2026-03-14.csv");
    }

    #[test]
    fn test_export_without_chart_alerts_and_skips_download() {
        let renderer = Renderer::new(MemoryDom::with_elements(ids::ALL));

        let result = export_chart(&renderer, date());

        assert!(matches!(result, Err(DashboardError::NoChartData)));
        assert_eq!(renderer.dom().alerts(), vec![NO_DATA_ALERT.to_string()]);
        assert!(renderer.dom().downloads().is_empty());
    }

    #[test]
    fn test_export_downloads_chart_csv() {
        let mut renderer = Renderer::new(MemoryDom::with_elements(ids::ALL));
        renderer.render_graph(&GraphTotals { winnings: 120.0, deposits: 50.0 });

        let name = export_chart(&renderer, date()).unwrap();

        let downloads = renderer.dom().downloads();
        assert_eq!(name, "chart_2026-03-14.csv");
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].mime, "text/csv");
        assert_eq!(downloads[0].contents, "Label,Value\nWinsten,120\nStortingen,50\n");
        assert!(renderer.dom().alerts().is_empty());
    }

    #[test]
    fn test_refused_download_alerts() {
        let mut renderer = Renderer::new(MemoryDom::with_elements(ids::ALL));
        renderer.render_graph(&GraphTotals { winnings: 1.0, deposits: 2.0 });
        renderer.dom().refuse_downloads();

        let result = export_chart(&renderer, date());

        assert!(matches!(result, Err(DashboardError::Dom(_))));
        assert_eq!(renderer.dom().alerts(), vec![EXPORT_FAILED_ALERT.to_string()]);
        assert!(renderer.dom().downloads().is_empty());
    }
}
