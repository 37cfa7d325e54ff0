//! Winnings vs. deposits bar chart
//!
//! The chart keeps its own labels and first-dataset values (what the export
//! reads) and draws itself as inline SVG.

use std::fmt::Write as _;

use crate::types::GraphTotals;

pub const WINNINGS_LABEL: &str = "Winsten";
pub const DEPOSITS_LABEL: &str = "Stortingen";
pub const DATASET_LABEL: &str = "USDT";

const BAR_COLORS: [&str; 2] = ["#28a745", "#dc3545"];
const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 32.0;

/// Labels and values of the first dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.values.is_empty()
    }
}

/// Bar chart over the two aggregates
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    data: ChartData,
}

impl BarChart {
    pub fn new(totals: &GraphTotals) -> Self {
        Self {
            data: ChartData {
                labels: vec![WINNINGS_LABEL.to_string(), DEPOSITS_LABEL.to_string()],
                values: vec![totals.winnings, totals.deposits],
            },
        }
    }

    /// Replace the dataset values, keeping labels
    pub fn update(&mut self, totals: &GraphTotals) {
        self.data.values = vec![totals.winnings, totals.deposits];
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    /// Draw as an SVG document; the y axis starts at zero
    pub fn to_svg(&self) -> String {
        let count = self.data.labels.len().min(self.data.values.len());
        let max = self
            .data
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let scale = if max > 0.0 { (HEIGHT - 2.0 * PADDING) / max } else { 0.0 };
        let slot = (WIDTH - 2.0 * PADDING) / count.max(1) as f64;
        let bar_width = slot * 0.6;
        let baseline = HEIGHT - PADDING;

        let mut svg =
            format!(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}""#);
        let _ = write!(svg, r#" role="img" aria-label="{DATASET_LABEL}">"#);
        let _ = write!(
            svg,
            r##"<line x1="{PADDING}" y1="{baseline}" x2="{x2}" y2="{baseline}""##,
            x2 = WIDTH - PADDING
        );
        svg.push_str(r##" stroke="#8b949e"/>"##);

        for (i, (label, value)) in self.data.labels.iter().zip(&self.data.values).enumerate() {
            let height = if value.is_finite() { value.max(0.0) * scale } else { 0.0 };
            let x = PADDING + slot * i as f64 + (slot - bar_width) / 2.0;
            let y = baseline - height;
            let color = BAR_COLORS[i % BAR_COLORS.len()];
            let center = x + bar_width / 2.0;

            let _ = write!(
                svg,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{height:.1}""#
            );
            let _ = write!(svg, r#" fill="{color}" stroke="{color}" stroke-width="1"/>"#);
            let _ = write!(
                svg,
                r#"<text x="{center:.1}" y="{vy:.1}" text-anchor="middle">{value}</text>"#,
                vy = y - 6.0
            );
            let _ = write!(
                svg,
                r#"<text x="{center:.1}" y="{ly:.1}" text-anchor="middle">{label}</text>"#,
                ly = baseline + 18.0
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_labels() {
        let mut chart = BarChart::new(&GraphTotals { winnings: 120.0, deposits: 50.0 });
        chart.update(&GraphTotals { winnings: 10.0, deposits: 75.5 });

        assert_eq!(chart.data().labels, vec!["Winsten", "Stortingen"]);
        assert_eq!(chart.data().values, vec![10.0, 75.5]);
    }

    #[test]
    fn test_svg_draws_one_bar_per_value() {
        let chart = BarChart::new(&GraphTotals { winnings: 120.0, deposits: 50.0 });
        let svg = chart.to_svg();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains(">Winsten<"));
        assert!(svg.contains(">120<"));
        // Tallest bar fills the plot height
        assert!(svg.contains(r#"height="176.0""#));
    }

    #[test]
    fn test_svg_with_no_positive_values() {
        let chart = BarChart::new(&GraphTotals { winnings: -5.0, deposits: 0.0 });
        let svg = chart.to_svg();
        assert_eq!(svg.matches(r#"height="0.0""#).count(), 2);
    }
}
