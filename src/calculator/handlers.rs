use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    calculator::{
        dto::{CalculateLambRequest, CalculationRequest, CalculationResult, HungerLevel, HungerLevelInfo},
        repo_types::LambCalculation,
        services::{calculate, summarize},
    },
    error::{AppError, AppResult},
    state::AppState,
};

pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate-lamb", post(calculate_lamb))
        .route("/hunger-levels", get(list_hunger_levels))
}

pub fn calculation_routes() -> Router<AppState> {
    Router::new().route("/calculations/:id", get(get_calculation))
}

/// POST /calculate-lamb { people: 1..=50, hungerLevel: "snacky"|"hungry"|"starving" }
#[instrument(skip(state, payload))]
pub async fn calculate_lamb(
    State(state): State<AppState>,
    payload: Result<Json<CalculateLambRequest>, JsonRejection>,
) -> AppResult<Json<CalculationResult>> {
    let Json(body) = payload.map_err(|e| {
        warn!(error = %e, "rejected calculation body");
        AppError::from(e)
    })?;
    let req = CalculationRequest::try_from(body).map_err(|e| {
        warn!(error = %e, "calculation request out of range");
        e
    })?;

    let result = calculate(req);

    // The result stands even if it cannot be recorded.
    match summarize(req, &result) {
        Ok(summary) => match state.storage.save_lamb_calculation(summary).await {
            Ok(saved) => info!(
                people = req.people,
                hunger_level = %req.hunger_level,
                calculation_id = %saved.id,
                "lamb calculated"
            ),
            Err(e) => error!(error = %e, "save_lamb_calculation failed"),
        },
        Err(e) => error!(error = %e, "summarize calculation failed"),
    }

    Ok(Json(result))
}

#[instrument(skip(state, id))]
pub async fn get_calculation(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<LambCalculation>> {
    let Path(id) = id?;
    match state.storage.get_lamb_calculation(id).await {
        Ok(Some(calc)) => Ok(Json(calc)),
        Ok(None) => Err(AppError::NotFound("Calculation not found".into())),
        Err(e) => {
            error!(error = %e, %id, "get_lamb_calculation failed");
            Err(e.into())
        }
    }
}

pub async fn list_hunger_levels() -> Json<Vec<HungerLevelInfo>> {
    Json(HungerLevel::ALL.into_iter().map(HungerLevelInfo::from).collect())
}
