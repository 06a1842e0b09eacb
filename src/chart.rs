//! Chart View Binding
//!
//! The single reactive edge of the dashboard: `render` maps the current
//! handle selection to a serializable chart figure over the fixed
//! engagement table. The hosting UI decides *when* to invoke it; this
//! module only decides *what* a selection renders to.
//!
//! `render` is pure given the selection and the table: no hidden state is
//! carried between invocations, so concurrent calls are safe without locks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::EngagementTable;

/// Color palette cycled across series
const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

/// A renderable multi-series line chart
///
/// An empty selection produces `Figure::empty()`: no series and no axis
/// metadata, which the UI treats as "clear the chart region".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Figure {
    pub series: Vec<Series>,
    /// X-axis label ("Date"), absent on the empty figure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    /// Y-axis label ("Likes"), absent on the empty figure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    /// Legend title mapped from the handle column ("Celebrity")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
    /// Render the y-axis on a logarithmic scale
    #[serde(default)]
    pub log_y: bool,
}

/// One line in the chart: a handle's daily mean likes over time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    /// Handle this series belongs to
    pub label: String,
    /// Assigned display color
    pub color: String,
    /// Points ordered by date ascending
    pub points: Vec<ChartPoint>,
}

/// A single (date, value) chart point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: i64,
}

impl Figure {
    /// The empty artifact: renders as a cleared chart region
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total point count across all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Render the selected handles into a chart figure
///
/// Handles not present in the table filter to nothing and simply produce
/// no series; they are not an error. Selection order does not matter: the
/// series come out in the table's sorted handle order so colors stay
/// stable across interactions.
pub fn render(table: &EngagementTable, selected: &[String]) -> Figure {
    if selected.is_empty() {
        return Figure::empty();
    }

    let series: Vec<Series> = table
        .handles()
        .iter()
        .filter(|h| selected.iter().any(|s| s == *h))
        .enumerate()
        .map(|(idx, handle)| {
            // Table rows are (date, handle) ordered, so this filter yields
            // a chronological series.
            let points: Vec<ChartPoint> = table
                .rows()
                .iter()
                .filter(|r| &r.handle == handle)
                .map(|r| ChartPoint {
                    date: r.date,
                    value: r.mean_likes,
                })
                .collect();

            Series {
                label: handle.clone(),
                color: SERIES_COLORS[idx % SERIES_COLORS.len()].to_string(),
                points,
            }
        })
        .collect();

    Figure {
        series,
        x_label: Some("Date".to_string()),
        y_label: Some("Likes".to_string()),
        legend_title: Some("Celebrity".to_string()),
        log_y: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{parse_posted_at, TweetRecord};

    fn table() -> EngagementTable {
        let record = |handle: &str, ts: &str, likes: i64| {
            TweetRecord::new(handle, parse_posted_at(ts).unwrap(), likes, likes / 10)
        };
        EngagementTable::from_records(vec![
            record("a", "2023-02-01", 100),
            record("a", "2023-02-02", 200),
            record("b", "2023-02-01", 50),
            record("c", "2023-02-03", 10),
        ])
    }

    fn selected(handles: &[&str]) -> Vec<String> {
        handles.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_renders_empty_figure() {
        let figure = render(&table(), &[]);
        assert!(figure.is_empty());
        assert_eq!(figure, Figure::empty());
        assert!(figure.x_label.is_none());
        assert!(!figure.log_y);
    }

    #[test]
    fn test_single_handle_chronological_series() {
        let figure = render(&table(), &selected(&["a"]));

        assert_eq!(figure.series.len(), 1);
        let series = &figure.series[0];
        assert_eq!(series.label, "a");
        assert_eq!(series.points.len(), 2);
        assert!(series.points[0].date < series.points[1].date);
        assert_eq!(series.points[0].value, 100);
        assert_eq!(series.points[1].value, 200);
    }

    #[test]
    fn test_two_handles_two_series_disjoint() {
        let figure = render(&table(), &selected(&["a", "b"]));

        assert_eq!(figure.series.len(), 2);
        let a = figure.series.iter().find(|s| s.label == "a").unwrap();
        let b = figure.series.iter().find(|s| s.label == "b").unwrap();
        assert_eq!(a.points.len(), 2);
        assert_eq!(b.points.len(), 1);
    }

    #[test]
    fn test_full_selection_round_trips_row_count() {
        let table = table();
        let figure = render(&table, &selected(&["a", "b", "c"]));
        assert_eq!(figure.point_count(), table.len());
    }

    #[test]
    fn test_out_of_domain_handle_is_noop_filter() {
        let figure = render(&table(), &selected(&["nobody"]));
        assert!(figure.series.is_empty());
        // Still a chart response, not an error or the empty artifact
        assert_eq!(figure.y_label.as_deref(), Some("Likes"));
    }

    #[test]
    fn test_axis_labels_and_log_scale() {
        let figure = render(&table(), &selected(&["a"]));
        assert_eq!(figure.x_label.as_deref(), Some("Date"));
        assert_eq!(figure.y_label.as_deref(), Some("Likes"));
        assert_eq!(figure.legend_title.as_deref(), Some("Celebrity"));
        assert!(figure.log_y);
    }

    #[test]
    fn test_series_order_independent_of_selection_order() {
        let fig1 = render(&table(), &selected(&["b", "a"]));
        let fig2 = render(&table(), &selected(&["a", "b"]));
        assert_eq!(fig1, fig2);
        assert_eq!(fig1.series[0].label, "a");
    }

    #[test]
    fn test_render_is_pure() {
        let table = table();
        let sel = selected(&["a", "c"]);
        assert_eq!(render(&table, &sel), render(&table, &sel));
    }

    #[test]
    fn test_empty_table_any_selection() {
        let empty = EngagementTable::from_records(Vec::new());
        let figure = render(&empty, &selected(&["a"]));
        assert!(figure.series.is_empty());
    }
}
