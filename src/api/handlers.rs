//! HTTP handlers for `/v1/pets`.
//!
//! Each handler validates its input, makes one call on [`PetClient`] and maps the outcome
//! onto a status code. Errors leave as [`Problem`] documents carrying the request path.

use actor_framework::ActorClient;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::Json;
use tracing::info;

use super::error::ApiError;
use super::problem::Problem;
use super::validation::{parse_pet_id, validate_pet, validate_query, PetPayload, PetQueryParams};
use crate::clients::PetClient;
use crate::domain::{Pet, PetEntity};

/// Answer for the liveness probe.
pub const HEALTH_MESSAGE: &str = "We are up and running!";

type ApiResult<T> = Result<T, Problem>;

fn problem(uri: &Uri) -> impl Fn(ApiError) -> Problem + '_ {
    move |e| e.into_problem(uri.path())
}

fn read_body(payload: Result<Json<PetPayload>, JsonRejection>) -> Result<Pet, ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(validate_pet(payload)?)
}

#[utoipa::path(
    get,
    path = "/v1/pets/up",
    tag = "pets",
    summary = "Health check",
    responses(
        (status = 200, description = "The service is up", body = String, content_type = "text/plain")
    )
)]
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

#[utoipa::path(
    post,
    path = "/v1/pets",
    tag = "pets",
    summary = "Add a pet to the pet store registry",
    request_body = Pet,
    responses(
        (status = 201, description = "Pet registered", body = PetEntity),
        (status = 400, description = "On an invalid request", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "On unknown internal server error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn create_pet(
    State(pets): State<PetClient>,
    uri: Uri,
    payload: Result<Json<PetPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PetEntity>)> {
    let pet = read_body(payload).map_err(problem(&uri))?;
    let created = pets.add(pet).await.map_err(ApiError::from).map_err(problem(&uri))?;

    info!(id = %created.id, "Pet registered");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/v1/pets/{id}",
    tag = "pets",
    summary = "Update a pet in the pet store registry",
    params(("id" = String, Path, description = "Unique pet identifier (UUID v4)")),
    request_body = Pet,
    responses(
        (status = 200, description = "Pet updated", body = PetEntity),
        (status = 400, description = "On an invalid request", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Pet was not found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "On unknown internal server error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn update_pet(
    State(pets): State<PetClient>,
    Path(id): Path<String>,
    uri: Uri,
    payload: Result<Json<PetPayload>, JsonRejection>,
) -> ApiResult<Json<PetEntity>> {
    let id = parse_pet_id(&id).map_err(ApiError::from).map_err(problem(&uri))?;
    let pet = read_body(payload).map_err(problem(&uri))?;
    let updated = pets.update(id, pet).await.map_err(ApiError::from).map_err(problem(&uri))?;

    info!(%id, "Pet updated");
    Ok(Json(updated))
}

#[utoipa::path(
    get,
    path = "/v1/pets/{id}",
    tag = "pets",
    summary = "Get a pet from the pet store registry",
    params(("id" = String, Path, description = "Unique pet identifier (UUID v4)")),
    responses(
        (status = 200, description = "The pet", body = PetEntity),
        (status = 400, description = "On an invalid request", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Pet was not found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "On unknown internal server error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_pet(
    State(pets): State<PetClient>,
    Path(id): Path<String>,
    uri: Uri,
) -> ApiResult<Json<PetEntity>> {
    let id = parse_pet_id(&id).map_err(ApiError::from).map_err(problem(&uri))?;
    let pet = pets.get(id).await.map_err(ApiError::from).map_err(problem(&uri))?;

    Ok(Json(pet))
}

#[utoipa::path(
    get,
    path = "/v1/pets",
    tag = "pets",
    summary = "Query pets in the pet store registry",
    params(PetQueryParams),
    responses(
        (status = 200, description = "Pets matching every given filter, in registration order", body = [PetEntity]),
        (status = 400, description = "On an invalid request", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "On unknown internal server error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_pets(
    State(pets): State<PetClient>,
    uri: Uri,
    params: Result<Query<PetQueryParams>, QueryRejection>,
) -> ApiResult<Json<Vec<PetEntity>>> {
    let Query(params) = params
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
        .map_err(problem(&uri))?;
    let query = validate_query(params).map_err(ApiError::from).map_err(problem(&uri))?;
    let found = pets.list(query).await.map_err(ApiError::from).map_err(problem(&uri))?;

    Ok(Json(found))
}

#[utoipa::path(
    delete,
    path = "/v1/pets/{id}",
    tag = "pets",
    summary = "Remove a pet from the pet store registry",
    params(("id" = String, Path, description = "Unique pet identifier (UUID v4)")),
    responses(
        (status = 200, description = "Pet removed"),
        (status = 400, description = "On an invalid request", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Pet was not found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "On unknown internal server error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn delete_pet(
    State(pets): State<PetClient>,
    Path(id): Path<String>,
    uri: Uri,
) -> ApiResult<StatusCode> {
    let id = parse_pet_id(&id).map_err(ApiError::from).map_err(problem(&uri))?;
    pets.delete(id).await.map_err(ApiError::from).map_err(problem(&uri))?;

    info!(%id, "Pet removed");
    Ok(StatusCode::OK)
}
