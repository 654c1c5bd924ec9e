//! Chart specifications
//!
//! Serializable figures in the shape plotly.js expects for
//! `Plotly.react(element, data, layout)`. The server only describes charts;
//! drawing happens in the browser.

use serde::{Deserialize, Serialize};

/// Plotly's default qualitative palette, used for scatter series
pub const SERIES_COLORS: [&str; 10] = [
    "#636EFA", // Blue
    "#EF553B", // Red
    "#00CC96", // Green
    "#AB63FA", // Purple
    "#FFA15A", // Orange
    "#19D3F3", // Cyan
    "#FF6692", // Pink
    "#B6E880", // Lime
    "#FF97FF", // Magenta
    "#FECB52", // Yellow
];

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

/// One plotly trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

/// Pie slices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Marker-only scatter series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub name: String,
    pub legendgroup: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    pub marker: Marker,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Title,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Figure {
    /// Single pie trace
    pub fn pie(title: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            data: vec![Trace::Pie(PieTrace { labels, values })],
            layout: FigureLayout {
                title: Title::new(title),
                xaxis: None,
                yaxis: None,
                legend: None,
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Slices of the first pie trace as (label, value) pairs
    pub fn pie_slices(&self) -> Vec<(&str, f64)> {
        self.data
            .iter()
            .find_map(|trace| match trace {
                Trace::Pie(pie) => Some(
                    pie.labels
                        .iter()
                        .map(String::as_str)
                        .zip(pie.values.iter().copied())
                        .collect(),
                ),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Total number of scatter points across all traces
    pub fn point_count(&self) -> usize {
        self.data
            .iter()
            .map(|trace| match trace {
                Trace::Scatter(scatter) => scatter.x.len(),
                Trace::Pie(_) => 0,
            })
            .sum()
    }

    /// All scatter points as (x, y) pairs, in trace order
    pub fn points(&self) -> Vec<(f64, u8)> {
        self.data
            .iter()
            .filter_map(|trace| match trace {
                Trace::Scatter(scatter) => Some(scatter),
                Trace::Pie(_) => None,
            })
            .flat_map(|scatter| scatter.x.iter().copied().zip(scatter.y.iter().copied()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_is_tagged_with_plotly_type() {
        let fig = Figure::pie("t", vec!["a".into()], vec![1.0]);
        let json = serde_json::to_value(&fig).unwrap();

        assert_eq!(json["data"][0]["type"], "pie");
        assert_eq!(json["data"][0]["labels"][0], "a");
        assert_eq!(json["layout"]["title"]["text"], "t");
        assert!(json["layout"].get("xaxis").is_none());
    }

    #[test]
    fn test_pie_slices_and_point_count() {
        let fig = Figure::pie("t", vec!["a".into(), "b".into()], vec![2.0, 3.0]);
        assert_eq!(fig.pie_slices(), vec![("a", 2.0), ("b", 3.0)]);
        assert_eq!(fig.point_count(), 0);
        assert!(fig.points().is_empty());
    }
}
