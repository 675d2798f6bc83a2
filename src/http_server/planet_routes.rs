//! Exoplanet HTTP Routes
//!
//! Thin adapter between HTTP and the catalog: decode, validate, call the
//! store, encode. No store lock is held across validation or estimation.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    estimate_fuel, first_value, parse_crew_capacity, validate, ListQuery, PlanetRecord,
};
use crate::observability::Logger;

use super::errors::{ApiError, ApiResult};
use super::state::AppState;

// ==================
// Request/Response Types
// ==================

/// Query pairs in request order. Repeated keys are allowed; the first wins.
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Default)]
pub struct FuelQuery {
    /// `crewCapacity`
    pub crew_capacity: Option<String>,
}

impl FuelQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            crew_capacity: first_value(pairs, "crewCapacity"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FuelResponse {
    pub fuel: f64,
}

// ==================
// Planet Routes
// ==================

/// Create exoplanet routes
pub fn planet_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/exoplanets",
            get(list_planets_handler).post(create_planet_handler),
        )
        .route(
            "/exoplanets/:id",
            get(get_planet_handler)
                .put(update_planet_handler)
                .delete(delete_planet_handler),
        )
        .route("/exoplanets/:id/fuel", get(fuel_estimate_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_planet_handler(
    State(state): State<AppState>,
    payload: Result<Json<PlanetRecord>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PlanetRecord>)> {
    let Json(candidate) = payload.map_err(|e| state.reject("create", e.into()))?;
    let record = validate(candidate).map_err(|e| state.reject("create", e.into()))?;

    let id = state.store.create(record.clone());
    state.metrics.increment_created();
    Logger::info(
        "PLANET_CREATED",
        &[("id", id.as_str()), ("name", record.name.as_str())],
    );

    Ok((StatusCode::CREATED, Json(record.with_id(id))))
}

async fn list_planets_handler(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<Vec<PlanetRecord>>> {
    let Query(pairs) = query.map_err(|e| state.reject("list", e.into()))?;
    let query = ListQuery::from_pairs(&pairs);

    let planets = query.apply(state.store.list());
    state.metrics.increment_lists();
    let count = planets.len().to_string();
    Logger::info("PLANETS_LISTED", &[("count", count.as_str())]);

    Ok(Json(planets))
}

async fn get_planet_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PlanetRecord>> {
    let planet = state
        .store
        .get(&id)
        .map_err(|e| state.reject("get", e.into()))?;

    state.metrics.increment_fetched();
    Logger::info("PLANET_FETCHED", &[("id", id.as_str())]);

    Ok(Json(planet))
}

async fn update_planet_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PlanetRecord>, JsonRejection>,
) -> ApiResult<Json<PlanetRecord>> {
    let Json(candidate) = payload.map_err(|e| state.reject("update", e.into()))?;
    let record = validate(candidate)
        .map_err(|e| state.reject("update", e.into()))?
        .with_id(id.clone());

    state
        .store
        .update(&id, record.clone())
        .map_err(|e| state.reject("update", e.into()))?;

    state.metrics.increment_updated();
    Logger::info("PLANET_UPDATED", &[("id", id.as_str())]);

    Ok(Json(record))
}

async fn delete_planet_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .store
        .delete(&id)
        .map_err(|e| state.reject("delete", e.into()))?;

    state.metrics.increment_deleted();
    Logger::info("PLANET_DELETED", &[("id", id.as_str())]);

    Ok(StatusCode::NO_CONTENT)
}

async fn fuel_estimate_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<FuelResponse>> {
    let Query(pairs) = query.map_err(|e| state.reject("fuel", e.into()))?;
    let query = FuelQuery::from_pairs(&pairs);

    // Crew capacity is checked before the lookup
    let raw = query
        .crew_capacity
        .filter(|c| !c.is_empty())
        .ok_or_else(|| state.reject("fuel", ApiError::MissingParam("crewCapacity")))?;
    let crew = parse_crew_capacity(&raw).map_err(|e| state.reject("fuel", e.into()))?;

    let planet = state
        .store
        .get(&id)
        .map_err(|e| state.reject("fuel", e.into()))?;
    let fuel = estimate_fuel(&planet, crew).map_err(|e| state.reject("fuel", e.into()))?;

    state.metrics.increment_fuel_estimates();
    let fuel_text = fuel.to_string();
    Logger::info(
        "FUEL_ESTIMATED",
        &[
            ("crew_capacity", raw.as_str()),
            ("fuel", fuel_text.as_str()),
            ("id", id.as_str()),
        ],
    );

    Ok(Json(FuelResponse { fuel }))
}
