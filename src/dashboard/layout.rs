//! Page layout
//!
//! Static description of the dashboard page, built once at startup. Only the
//! slider's initial value depends on the data (the dataset's payload bounds).

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::{PayloadBounds, PayloadRange, ALL_SITES, LAUNCH_SITES};

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SLIDER_MIN: u32 = 0;
pub const SLIDER_MAX: u32 = 10_000;
pub const SLIDER_STEP: u32 = 1_000;

/// Everything on the page, top to bottom
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub heading: Heading,
    pub site_dropdown: Dropdown,
    pub pie_chart: Graph,
    pub payload_label: String,
    pub payload_slider: RangeSlider,
    pub scatter_chart: Graph,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub text: String,
    pub style: HeadingStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    /// Selected value
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Dual-handled slider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: String,
    pub min: u32,
    pub max: u32,
    pub step: u32,
    /// Tick position -> label
    pub marks: BTreeMap<u32, String>,
    /// Initially selected sub-range
    pub value: PayloadRange,
}

/// Chart placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub id: String,
}

impl DashboardLayout {
    pub fn build(bounds: PayloadBounds) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(LAUNCH_SITES.iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }));

        let marks = (SLIDER_MIN..=SLIDER_MAX)
            .step_by(SLIDER_STEP as usize)
            .map(|tick| (tick, tick.to_string()))
            .collect();

        Self {
            heading: Heading {
                text: DASHBOARD_TITLE.to_string(),
                style: HeadingStyle {
                    text_align: "center".to_string(),
                    color: "#503D36".to_string(),
                    font_size: 40,
                },
            },
            site_dropdown: Dropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here.".to_string(),
                searchable: true,
            },
            pie_chart: Graph {
                id: PIE_CHART_ID.to_string(),
            },
            payload_label: "Payload range (Kg):".to_string(),
            payload_slider: RangeSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks,
                value: bounds.into(),
            },
            scatter_chart: Graph {
                id: SCATTER_CHART_ID.to_string(),
            },
        }
    }

    /// Site names offered by the dropdown, excluding the `ALL` sentinel
    pub fn site_options(&self) -> Vec<&str> {
        self.site_dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .filter(|v| *v != ALL_SITES)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> PayloadBounds {
        PayloadBounds {
            min: 0.0,
            max: 9600.0,
        }
    }

    #[test]
    fn test_dropdown_options() {
        let layout = DashboardLayout::build(bounds());
        let dropdown = &layout.site_dropdown;

        assert_eq!(dropdown.options.len(), 5);
        assert_eq!(dropdown.options[0].label, "All Sites");
        assert_eq!(dropdown.options[0].value, "ALL");
        assert_eq!(dropdown.value, "ALL");
        assert_eq!(layout.site_options(), LAUNCH_SITES.to_vec());
    }

    #[test]
    fn test_slider_marks_and_value() {
        let layout = DashboardLayout::build(bounds());
        let slider = &layout.payload_slider;

        assert_eq!((slider.min, slider.max, slider.step), (0, 10_000, 1_000));
        assert_eq!(slider.marks.len(), 11);
        assert_eq!(slider.marks.get(&0).map(String::as_str), Some("0"));
        assert_eq!(slider.marks.get(&10_000).map(String::as_str), Some("10000"));
        assert_eq!(slider.value.low(), 0.0);
        assert_eq!(slider.value.high(), 9600.0);
    }

    #[test]
    fn test_layout_json_shape() {
        let layout = DashboardLayout::build(bounds());
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["heading"]["text"], DASHBOARD_TITLE);
        assert_eq!(json["pie_chart"]["id"], PIE_CHART_ID);
        assert_eq!(json["scatter_chart"]["id"], SCATTER_CHART_ID);
        assert_eq!(json["payload_slider"]["value"][1], 9600.0);
        assert_eq!(json["payload_slider"]["marks"]["5000"], "5000");
    }
}
