pub mod clientes;
pub mod veiculos;
pub mod agendamentos;

use axum::{
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: entity routes, health and Swagger UI.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let clientes = Router::new()
        .route("/clientes", get(clientes::listar).post(clientes::criar))
        .route(
            "/clientes/:id",
            get(clientes::buscar).put(clientes::atualizar).delete(clientes::remover),
        );

    let veiculos = Router::new()
        .route("/veiculos", get(veiculos::listar).post(veiculos::criar))
        .route(
            "/veiculos/:id",
            get(veiculos::buscar).put(veiculos::atualizar).delete(veiculos::remover),
        )
        .route("/veiculos/cliente/:id", get(veiculos::por_cliente));

    let agendamentos = Router::new()
        .route("/agendamentos", get(agendamentos::listar).post(agendamentos::criar))
        .route(
            "/agendamentos/:id",
            axum::routing::put(agendamentos::atualizar).delete(agendamentos::remover),
        )
        .route("/agendamentos/veiculo/:id", get(agendamentos::por_veiculo))
        .route("/agendamentos/cliente/:id", get(agendamentos::por_cliente));

    Router::new()
        .route("/health", get(health))
        .merge(clientes)
        .merge(veiculos)
        .merge(agendamentos)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
