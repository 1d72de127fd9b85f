use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::ApiError;
use crate::extract::{PathId, ValidatedJson};
use crate::routes::ServerState;
use crate::schemas::{AtualizarVeiculoInput, CriarVeiculoInput, VeiculoDetalhe};
use service::veiculo_service;

#[utoipa::path(
    post, path = "/veiculos", tag = "veiculos",
    request_body = CriarVeiculoInput,
    responses(
        (status = 201, description = "Created", body = VeiculoDetalhe),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Owner cliente not found"),
        (status = 409, description = "Duplicate placa or chassi")
    )
)]
pub async fn criar(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<CriarVeiculoInput>,
) -> Result<(StatusCode, Json<models::veiculo::Model>), ApiError> {
    let created = veiculo_service::create_veiculo(
        &state.db,
        &input.placa,
        &input.chassi,
        &input.modelo,
        input.ano,
        input.cliente_id,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/veiculos", tag = "veiculos",
    responses((status = 200, description = "All veiculos, or a notice when none exist", body = [VeiculoDetalhe]))
)]
pub async fn listar(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let rows = veiculo_service::list_veiculos(&state.db).await?;
    if rows.is_empty() {
        return Ok(
            Json(serde_json::json!({ "message": "Nenhum veículo cadastrado ainda." })).into_response()
        );
    }
    let out: Vec<VeiculoDetalhe> = rows.into_iter().map(Into::into).collect();
    Ok(Json(out).into_response())
}

#[utoipa::path(
    get, path = "/veiculos/{id}", tag = "veiculos",
    params(("id" = i32, Path, description = "Veiculo ID")),
    responses(
        (status = 200, description = "OK", body = VeiculoDetalhe),
        (status = 404, description = "Not Found")
    )
)]
pub async fn buscar(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> Result<Json<VeiculoDetalhe>, ApiError> {
    match veiculo_service::get_veiculo(&state.db, id).await? {
        Some(row) => Ok(Json(row.into())),
        None => Err(ApiError::not_found("Veículo não encontrado")),
    }
}

#[utoipa::path(
    get, path = "/veiculos/cliente/{id}", tag = "veiculos",
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "Veiculos of the cliente; empty list is valid"),
        (status = 404, description = "Cliente not found")
    )
)]
pub async fn por_cliente(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> Result<Json<Vec<models::veiculo::Model>>, ApiError> {
    let rows = veiculo_service::veiculos_do_cliente(&state.db, id).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put, path = "/veiculos/{id}", tag = "veiculos",
    params(("id" = i32, Path, description = "Veiculo ID")),
    request_body = AtualizarVeiculoInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Duplicate placa or chassi")
    )
)]
pub async fn atualizar(
    State(state): State<ServerState>,
    PathId(id): PathId,
    ValidatedJson(input): ValidatedJson<AtualizarVeiculoInput>,
) -> Result<Json<models::veiculo::Model>, ApiError> {
    let updated = veiculo_service::update_veiculo(
        &state.db,
        id,
        input.placa.as_deref(),
        input.chassi.as_deref(),
        input.modelo.as_deref(),
        input.ano,
        input.cliente_id,
    )
    .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/veiculos/{id}", tag = "veiculos",
    params(("id" = i32, Path, description = "Veiculo ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Still referenced by agendamentos")
    )
)]
pub async fn remover(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    veiculo_service::delete_veiculo(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
