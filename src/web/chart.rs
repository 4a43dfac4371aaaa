//! Inline SVG line chart for daily sentiment.
//!
//! The chart is laid out on the server: this module turns a series of
//! metric points into pixel coordinates and the `chart.html` partial draws
//! them. Hovering a point shows its SVG `<title>` as a tooltip.

use crate::backend::types::MetricPoint;
use crate::cli::types::time::day_string;

/// Fixed vertical domain; compound scores are plotted against [-1, 1]
/// whatever range the data actually covers.
pub const Y_DOMAIN: (f64, f64) = (-1.0, 1.0);

const Y_TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];
const MAX_X_LABELS: usize = 8;

pub const WIDTH: f64 = 720.0;
pub const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the tick's axis
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartMarker {
    pub x: f64,
    pub y: f64,
    pub tooltip: String,
}

/// Pixel-space layout of one line chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub y_ticks: Vec<AxisTick>,
    pub x_ticks: Vec<AxisTick>,
    pub markers: Vec<ChartMarker>,
    /// `points` attribute of the SVG polyline
    pub line: String,
}

impl ChartView {
    /// Lay out `points` in order, evenly spaced along the x axis.
    pub fn from_points(points: &[MetricPoint]) -> Self {
        let left = MARGIN_LEFT;
        let right = WIDTH - MARGIN_RIGHT;
        let top = MARGIN_TOP;
        let bottom = HEIGHT - MARGIN_BOTTOM;

        let x_at = |index: usize| -> f64 {
            if points.len() <= 1 {
                (left + right) / 2.0
            } else {
                left + (right - left) * index as f64 / (points.len() - 1) as f64
            }
        };

        let y_ticks = Y_TICKS
            .iter()
            .map(|&value| AxisTick {
                position: y_position(value, top, bottom),
                label: format!("{}", value),
            })
            .collect();

        let step = points.len().div_ceil(MAX_X_LABELS).max(1);
        let x_ticks = points
            .iter()
            .enumerate()
            .filter(|(i, _)| i % step == 0)
            .map(|(i, p)| AxisTick {
                position: x_at(i),
                label: day_string(p.date),
            })
            .collect();

        let markers: Vec<ChartMarker> = points
            .iter()
            .enumerate()
            .map(|(i, p)| ChartMarker {
                x: x_at(i),
                y: y_position(p.avg_compound, top, bottom),
                tooltip: format!("{}: {:.3}", day_string(p.date), p.avg_compound),
            })
            .collect();

        let line = markers
            .iter()
            .map(|m| format!("{:.1},{:.1}", m.x, m.y))
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            width: WIDTH,
            height: HEIGHT,
            left,
            right,
            top,
            bottom,
            y_ticks,
            x_ticks,
            markers,
            line,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn y_min(&self) -> f64 {
        Y_DOMAIN.0
    }

    pub fn y_max(&self) -> f64 {
        Y_DOMAIN.1
    }

    /// Pixel row of the zero line.
    pub fn baseline(&self) -> f64 {
        y_position(0.0, self.top, self.bottom)
    }
}

/// Map a score onto the plot, clamping values outside [`Y_DOMAIN`] to its edges.
fn y_position(value: f64, top: f64, bottom: f64) -> f64 {
    let (lo, hi) = Y_DOMAIN;
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(lo, hi) };
    bottom - (clamped - lo) / (hi - lo) * (bottom - top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, score: f64) -> MetricPoint {
        MetricPoint {
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            avg_compound: score,
            comment_count: None,
            pos_share: None,
            neg_share: None,
        }
    }

    #[test]
    fn test_empty_series_still_has_axes() {
        let chart = ChartView::from_points(&[]);
        assert!(chart.is_empty());
        assert!(chart.line.is_empty());
        assert!(chart.x_ticks.is_empty());
        assert_eq!(chart.y_ticks.len(), 5);
    }

    #[test]
    fn test_y_domain_is_fixed() {
        let narrow = ChartView::from_points(&[point(1, 0.01), point(2, 0.02)]);
        let wide = ChartView::from_points(&[point(1, -0.9), point(2, 0.9)]);

        assert_eq!(narrow.y_ticks, wide.y_ticks);
        let labels: Vec<&str> = narrow.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["-1", "-0.5", "0", "0.5", "1"]);
        assert_eq!(narrow.y_ticks[0].position, narrow.bottom);
        assert_eq!(narrow.y_ticks[4].position, narrow.top);
    }

    #[test]
    fn test_scores_map_onto_plot() {
        let chart = ChartView::from_points(&[point(1, -1.0), point(2, 0.0), point(3, 1.0)]);
        assert_eq!(chart.markers[0].y, chart.bottom);
        assert_eq!(chart.markers[1].y, chart.baseline());
        assert_eq!(chart.markers[2].y, chart.top);
        assert_eq!(chart.markers[0].x, chart.left);
        assert_eq!(chart.markers[2].x, chart.right);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let chart = ChartView::from_points(&[point(1, -3.0), point(2, 7.5)]);
        assert_eq!(chart.markers[0].y, chart.bottom);
        assert_eq!(chart.markers[1].y, chart.top);
        // Tooltip keeps the raw value
        assert_eq!(chart.markers[1].tooltip, "2026-10-02: 7.500");
    }

    #[test]
    fn test_single_point_is_centered() {
        let chart = ChartView::from_points(&[point(5, 0.25)]);
        assert_eq!(chart.markers.len(), 1);
        assert_eq!(chart.markers[0].x, (chart.left + chart.right) / 2.0);
        assert_eq!(chart.x_ticks[0].label, "2026-10-05");
    }

    #[test]
    fn test_line_follows_markers() {
        let chart = ChartView::from_points(&[point(1, 0.0), point(2, 0.5)]);
        assert_eq!(chart.line, "48.0,148.0 704.0,82.0");
    }

    #[test]
    fn test_x_labels_are_thinned() {
        let points: Vec<MetricPoint> = (1..=15).map(|d| point(d, 0.0)).collect();
        let chart = ChartView::from_points(&points);
        assert_eq!(chart.markers.len(), 15);
        assert_eq!(chart.x_ticks.len(), 8);
        assert_eq!(chart.x_ticks[0].label, "2026-10-01");
        assert_eq!(chart.x_ticks[1].label, "2026-10-03");
    }

    #[test]
    fn test_nan_score_sits_on_baseline() {
        let chart = ChartView::from_points(&[point(1, f64::NAN)]);
        assert_eq!(chart.markers[0].y, chart.baseline());
    }
}
