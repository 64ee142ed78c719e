use axum::extract::Path;
use axum::Json;
use contracts::shared::postcode::{StateResponse, TownsResponse};

use crate::shared::logistics::postcode::{resolve_state, suggest_towns};

/// GET /api/postcode/:postcode/state
pub async fn get_state(Path(postcode): Path<String>) -> Json<StateResponse> {
    let state = resolve_state(&postcode);
    Json(StateResponse {
        postcode,
        state: state.to_string(),
    })
}

/// GET /api/postcode/:postcode/towns
///
/// Empty list for unknown postcodes, never an error. The checkout page
/// pre-selects the first suggestion.
pub async fn get_towns(Path(postcode): Path<String>) -> Json<TownsResponse> {
    let towns = suggest_towns(&postcode)
        .into_iter()
        .map(|t| t.to_string())
        .collect();
    Json(TownsResponse { postcode, towns })
}
