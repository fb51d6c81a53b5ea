//! Car registry handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use core_kernel::{CarId, OwnerId};
use domain_registry::{NewCarData, NewClaimData, NewPolicyData};

use crate::dto::cars::*;
use crate::error::ApiError;
use crate::AppState;

/// Lists all cars with their owner's contact details
pub async fn list_cars(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let cars = state.registry.list_cars().await?;
    let body: Vec<CarResponse> = cars.into_iter().map(CarResponse::from).collect();
    Ok(Json(body))
}

/// Reports whether some policy of the car covers the queried date
pub async fn insurance_valid(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ValidityParams>,
) -> Result<impl IntoResponse, ApiError> {
    let car_id = CarId::from_uuid(id);
    let valid = state.registry.insurance_valid(car_id, params.date).await?;
    Ok(Json(ValidityResponse {
        car_id: id,
        date: params.date,
        valid,
    }))
}

/// Registers a new car
pub async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let data = NewCarData {
        vin: request.vin,
        make: request.make,
        model: request.model,
        year_of_manufacture: request.year_of_manufacture,
        owner_id: OwnerId::from_uuid(request.owner_id),
    };
    let id = state.registry.create_car(data).await?;
    Ok(created(format!("/api/cars/{}", id.as_uuid()), *id.as_uuid()))
}

/// Creates a policy for a car
pub async fn create_policy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreatePolicyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let car_id = CarId::from_uuid(id);
    let data = NewPolicyData {
        start_date: request.start_date,
        end_date: request.end_date,
        provider: request.provider,
    };
    let policy_id = state.registry.create_policy(car_id, data).await?;
    Ok(created(
        format!("/api/cars/{id}/policies/{}", policy_id.as_uuid()),
        *policy_id.as_uuid(),
    ))
}

/// Files a claim against a car
///
/// A rejected payload (unparsable date, blank description, non-positive
/// amount) maps to 400; an unknown car still maps to 404.
pub async fn create_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let car_id = CarId::from_uuid(id);
    let data = NewClaimData {
        claim_date: request.claim_date,
        description: request.description,
        amount: request.amount,
    };
    match state.registry.create_claim(car_id, data).await? {
        Some(claim_id) => Ok(created(
            format!("/api/cars/{id}/claims/{}", claim_id.as_uuid()),
            *claim_id.as_uuid(),
        )),
        None => Err(ApiError::BadRequest("Claim payload rejected".to_string())),
    }
}

/// Returns the car's merged policy/claim history
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let car_id = CarId::from_uuid(id);
    let entries = state.registry.history(car_id).await?;
    let body: Vec<HistoryEntryResponse> = entries
        .into_iter()
        .map(HistoryEntryResponse::from)
        .collect();
    Ok(Json(body))
}

fn created(location: String, id: Uuid) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatedResponse { id }),
    )
}
