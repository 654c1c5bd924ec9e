//! Payload vs. outcome scatter chart
//!
//! Points are filtered by payload range and site, then split into one series
//! per booster version category so each category gets its own colour.

use super::figure::{
    Axis, Figure, FigureLayout, Legend, Marker, ScatterTrace, Title, Trace, SERIES_COLORS,
};
use crate::dataset::{Dataset, PayloadRange, SiteSelection};

pub const X_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const Y_AXIS_TITLE: &str = "class";
pub const LEGEND_TITLE: &str = "Booster Version Category";

/// Scatter figure for the selected site and payload range
///
/// An empty selection yields a figure with no traces.
pub fn payload_scatter_chart(
    dataset: &Dataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Figure {
    let mut traces: Vec<ScatterTrace> = Vec::new();

    for record in dataset.filter(site, Some(range)) {
        let category = record.booster_version_category.as_str();
        let idx = match traces.iter().position(|t| t.name == category) {
            Some(idx) => idx,
            None => {
                let color = SERIES_COLORS[traces.len() % SERIES_COLORS.len()];
                traces.push(ScatterTrace {
                    name: category.to_string(),
                    legendgroup: category.to_string(),
                    mode: "markers".to_string(),
                    x: Vec::new(),
                    y: Vec::new(),
                    marker: Marker {
                        color: color.to_string(),
                    },
                    showlegend: true,
                });
                traces.len() - 1
            }
        };

        traces[idx].x.push(record.payload_mass_kg);
        traces[idx].y.push(record.class.value());
    }

    let title = match site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Outcome for {}", name),
    };

    Figure {
        data: traces.into_iter().map(Trace::Scatter).collect(),
        layout: FigureLayout {
            title: Title::new(title),
            xaxis: Some(Axis {
                title: Title::new(X_AXIS_TITLE),
            }),
            yaxis: Some(Axis {
                title: Title::new(Y_AXIS_TITLE),
            }),
            legend: Some(Legend {
                title: Title::new(LEGEND_TITLE),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::scenario_dataset;

    fn full_range() -> PayloadRange {
        PayloadRange::new(0.0, 10000.0).unwrap()
    }

    #[test]
    fn test_all_sites_full_range_plots_every_record() {
        let dataset = scenario_dataset();
        let fig = payload_scatter_chart(&dataset, &SiteSelection::All, full_range());

        assert_eq!(fig.title(), "Payload vs. Outcome for All Sites");
        assert_eq!(fig.point_count(), dataset.len());
    }

    #[test]
    fn test_single_site_scenario() {
        let dataset = scenario_dataset();
        let site = SiteSelection::parse("KSC LC-39A");
        let fig = payload_scatter_chart(&dataset, &site, full_range());

        assert_eq!(fig.title(), "Payload vs. Outcome for KSC LC-39A");
        assert_eq!(fig.points(), vec![(3000.0, 1)]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let dataset = scenario_dataset();
        let range = PayloadRange::new(500.0, 3000.0).unwrap();
        let fig = payload_scatter_chart(&dataset, &SiteSelection::All, range);

        let expected = dataset
            .records()
            .iter()
            .filter(|r| r.payload_mass_kg >= 500.0 && r.payload_mass_kg <= 3000.0)
            .count();
        assert_eq!(expected, 2);
        assert_eq!(fig.point_count(), expected);
    }

    #[test]
    fn test_one_series_per_booster_category() {
        let dataset = scenario_dataset();
        let fig = payload_scatter_chart(&dataset, &SiteSelection::All, full_range());

        let names: Vec<&str> = fig
            .data
            .iter()
            .filter_map(|t| match t {
                Trace::Scatter(s) => Some(s.name.as_str()),
                Trace::Pie(_) => None,
            })
            .collect();
        assert_eq!(names, vec!["v1", "v2"]);

        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["marker"]["color"], SERIES_COLORS[0]);
        assert_eq!(json["data"][1]["marker"]["color"], SERIES_COLORS[1]);
        assert_eq!(json["layout"]["xaxis"]["title"]["text"], X_AXIS_TITLE);
        assert_eq!(json["layout"]["legend"]["title"]["text"], LEGEND_TITLE);
    }

    #[test]
    fn test_empty_selection_renders_empty_chart() {
        let dataset = scenario_dataset();
        let range = PayloadRange::new(9500.0, 10000.0).unwrap();
        let fig = payload_scatter_chart(&dataset, &SiteSelection::parse("KSC LC-39A"), range);

        assert!(fig.data.is_empty());
        assert_eq!(fig.point_count(), 0);
        assert_eq!(fig.title(), "Payload vs. Outcome for KSC LC-39A");
    }

    #[test]
    fn test_idempotent() {
        let dataset = scenario_dataset();
        let range = PayloadRange::new(1000.0, 8000.0).unwrap();
        let site = SiteSelection::parse("VAFB SLC-4E");
        assert_eq!(
            payload_scatter_chart(&dataset, &site, range),
            payload_scatter_chart(&dataset, &site, range)
        );
    }
}
