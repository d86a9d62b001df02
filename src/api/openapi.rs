use axum::Json;
use utoipa::OpenApi;

use super::handlers;
use super::problem::{Problem, ValidationViolation};
use crate::domain::{Pet, PetEntity, PetType};

/// OpenAPI document for the pet store, served at `/api-json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Pet store", description = "Pet store API spec", version = "1.0"),
    paths(
        handlers::health,
        handlers::create_pet,
        handlers::update_pet,
        handlers::get_pet,
        handlers::list_pets,
        handlers::delete_pet,
    ),
    components(schemas(Pet, PetEntity, PetType, Problem, ValidationViolation)),
    tags((name = "pets", description = "Pet store registry"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
