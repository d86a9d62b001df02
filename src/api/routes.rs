use axum::routing::get;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::{handlers, openapi};
use crate::clients::PetClient;

/// Build the application router around a running pet actor.
pub fn build_router(pets: PetClient) -> Router {
    Router::new()
        .route("/v1/pets", get(handlers::list_pets).post(handlers::create_pet))
        .route("/v1/pets/up", get(handlers::health))
        .route(
            "/v1/pets/{id}",
            get(handlers::get_pet)
                .put(handlers::update_pet)
                .delete(handlers::delete_pet),
        )
        .route("/api-json", get(openapi::openapi_json))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(pets)
}
