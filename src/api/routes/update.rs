//! Update Routes
//!
//! Callback dispatch: the page posts its current input values and gets back
//! a figure for every output that depends on the changed input.
//!
//! - POST /api/v1/update - Recompute chart figures

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::dto::{StateDto, UpdateRequest, UpdateResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::DashboardState;
use crate::dataset::{PayloadRange, SiteSelection};

/// POST /api/v1/update
///
/// Output selection, first match wins:
/// 1. `outputs` listed explicitly
/// 2. outputs depending on `triggered_by`
/// 3. every registered output (initial page load)
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRequest>,
) -> ApiResult<Json<UpdateResponse>> {
    let dashboard_state = resolve_state(&state, req.state)?;

    let outputs: Vec<String> = match (req.outputs, req.triggered_by) {
        (Some(outputs), _) => outputs,
        (None, Some(input)) => state
            .callbacks
            .outputs_for_input(&input)?
            .into_iter()
            .map(String::from)
            .collect(),
        (None, None) => state
            .callbacks
            .outputs()
            .into_iter()
            .map(String::from)
            .collect(),
    };

    let mut figures = BTreeMap::new();
    for output in outputs {
        let figure = state
            .callbacks
            .dispatch(&state.dataset, &output, &dashboard_state)?;
        figures.insert(output, figure);
    }

    tracing::debug!(
        site = %dashboard_state.site,
        low = dashboard_state.payload_range.low(),
        high = dashboard_state.payload_range.high(),
        figures = figures.len(),
        "Callbacks dispatched"
    );

    Ok(Json(UpdateResponse { figures }))
}

/// Fill in missing inputs from the initial state and validate the range
fn resolve_state(state: &AppState, dto: StateDto) -> ApiResult<DashboardState> {
    let mut resolved = state.initial_state();

    if let Some(site) = dto.site {
        resolved = resolved.with_site(SiteSelection::from(site));
    }
    if let Some([low, high]) = dto.payload_range {
        resolved = resolved.with_payload_range(PayloadRange::new(low, high)?);
    }

    Ok(resolved)
}
