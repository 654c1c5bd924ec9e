//! Callback registry
//!
//! Pure functions keyed by the output component they produce. Each callback
//! declares which input components it reads, so an event on one input only
//! re-runs the callbacks that depend on it.

use serde::Serialize;

use super::error::{DashboardError, DashboardResult};
use super::figure::Figure;
use super::layout::{PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID};
use super::proportion::success_pie_chart;
use super::scatter::payload_scatter_chart;
use super::state::DashboardState;
use crate::dataset::Dataset;

/// Signature shared by every chart callback
pub type CallbackFn = fn(&Dataset, &DashboardState) -> Figure;

/// One registered callback
#[derive(Clone)]
pub struct Callback {
    pub output: &'static str,
    pub inputs: &'static [&'static str],
    handler: CallbackFn,
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish()
    }
}

/// Output/input wiring sent to the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dependency {
    pub output: &'static str,
    pub inputs: &'static [&'static str],
}

#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The two dashboard charts
    pub fn dashboard() -> Self {
        Self::new()
            .register(PIE_CHART_ID, &[SITE_DROPDOWN_ID], |dataset, state| {
                success_pie_chart(dataset, &state.site)
            })
            .register(
                SCATTER_CHART_ID,
                &[SITE_DROPDOWN_ID, PAYLOAD_SLIDER_ID],
                |dataset, state| payload_scatter_chart(dataset, &state.site, state.payload_range),
            )
    }

    /// Register a callback; a later registration for the same output replaces
    /// the earlier one
    pub fn register(
        mut self,
        output: &'static str,
        inputs: &'static [&'static str],
        handler: CallbackFn,
    ) -> Self {
        self.callbacks.retain(|cb| cb.output != output);
        self.callbacks.push(Callback {
            output,
            inputs,
            handler,
        });
        self
    }

    /// Output ids in registration order
    pub fn outputs(&self) -> Vec<&'static str> {
        self.callbacks.iter().map(|cb| cb.output).collect()
    }

    /// Outputs that must be recomputed when `input` changes
    pub fn outputs_for_input(&self, input: &str) -> DashboardResult<Vec<&'static str>> {
        let outputs: Vec<&'static str> = self
            .callbacks
            .iter()
            .filter(|cb| cb.inputs.contains(&input))
            .map(|cb| cb.output)
            .collect();

        if outputs.is_empty() {
            return Err(DashboardError::UnknownInput(input.to_string()));
        }
        Ok(outputs)
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.callbacks
            .iter()
            .map(|cb| Dependency {
                output: cb.output,
                inputs: cb.inputs,
            })
            .collect()
    }

    /// Run the callback producing `output`
    pub fn dispatch(
        &self,
        dataset: &Dataset,
        output: &str,
        state: &DashboardState,
    ) -> DashboardResult<Figure> {
        let callback = self
            .callbacks
            .iter()
            .find(|cb| cb.output == output)
            .ok_or_else(|| DashboardError::UnknownOutput(output.to_string()))?;

        tracing::debug!(output = %output, site = %state.site, "Dispatching callback");

        Ok((callback.handler)(dataset, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::scenario_dataset;
    use crate::dataset::{PayloadRange, SiteSelection};

    #[test]
    fn test_dashboard_wiring() {
        let registry = CallbackRegistry::dashboard();

        assert_eq!(registry.outputs(), vec![PIE_CHART_ID, SCATTER_CHART_ID]);
        assert_eq!(
            registry.outputs_for_input(SITE_DROPDOWN_ID).unwrap(),
            vec![PIE_CHART_ID, SCATTER_CHART_ID]
        );
        assert_eq!(
            registry.outputs_for_input(PAYLOAD_SLIDER_ID).unwrap(),
            vec![SCATTER_CHART_ID]
        );
        assert_eq!(
            registry.outputs_for_input("nope"),
            Err(DashboardError::UnknownInput("nope".to_string()))
        );
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let dataset = scenario_dataset();
        let registry = CallbackRegistry::dashboard();
        let state = DashboardState::new(
            SiteSelection::parse("KSC LC-39A"),
            PayloadRange::new(0.0, 10000.0).unwrap(),
        );

        let pie = registry.dispatch(&dataset, PIE_CHART_ID, &state).unwrap();
        assert_eq!(pie, success_pie_chart(&dataset, &state.site));

        let scatter = registry.dispatch(&dataset, SCATTER_CHART_ID, &state).unwrap();
        assert_eq!(scatter.points(), vec![(3000.0, 1)]);
    }

    #[test]
    fn test_dispatch_unknown_output() {
        let dataset = scenario_dataset();
        let registry = CallbackRegistry::dashboard();
        let state = DashboardState::initial(&dataset);

        assert_eq!(
            registry.dispatch(&dataset, "missing-chart", &state),
            Err(DashboardError::UnknownOutput("missing-chart".to_string()))
        );
    }

    #[test]
    fn test_register_replaces_existing_output() {
        let registry = CallbackRegistry::dashboard().register(
            PIE_CHART_ID,
            &[SITE_DROPDOWN_ID],
            |_, _| Figure::pie("replaced", Vec::new(), Vec::new()),
        );

        let dataset = scenario_dataset();
        let state = DashboardState::initial(&dataset);
        let fig = registry.dispatch(&dataset, PIE_CHART_ID, &state).unwrap();

        assert_eq!(fig.title(), "replaced");
        assert_eq!(registry.outputs().len(), 2);
    }
}
