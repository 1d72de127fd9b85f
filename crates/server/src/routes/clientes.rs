use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::ApiError;
use crate::extract::{PathId, ValidatedJson};
use crate::routes::ServerState;
use crate::schemas::{AtualizarClienteInput, ClienteDetalhe, CriarClienteInput};
use service::cliente_service;

#[utoipa::path(
    post, path = "/clientes", tag = "clientes",
    request_body = CriarClienteInput,
    responses(
        (status = 201, description = "Created", body = ClienteDetalhe),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Duplicate CPF")
    )
)]
pub async fn criar(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<CriarClienteInput>,
) -> Result<(StatusCode, Json<models::cliente::Model>), ApiError> {
    let created =
        cliente_service::create_cliente(&state.db, &input.cpf, &input.nome, &input.telefone).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/clientes", tag = "clientes",
    responses((status = 200, description = "All clientes, or a notice when none exist", body = [ClienteDetalhe]))
)]
pub async fn listar(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let rows = cliente_service::list_clientes(&state.db).await?;
    if rows.is_empty() {
        return Ok(
            Json(serde_json::json!({ "message": "Nenhum cliente cadastrado ainda." })).into_response()
        );
    }
    let out: Vec<ClienteDetalhe> = rows.into_iter().map(Into::into).collect();
    Ok(Json(out).into_response())
}

#[utoipa::path(
    get, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "OK", body = ClienteDetalhe),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn buscar(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> Result<Json<ClienteDetalhe>, ApiError> {
    match cliente_service::get_cliente(&state.db, id).await? {
        Some(row) => Ok(Json(row.into())),
        None => Err(ApiError::not_found("Cliente não encontrado")),
    }
}

#[utoipa::path(
    put, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
    request_body = AtualizarClienteInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Duplicate CPF")
    )
)]
pub async fn atualizar(
    State(state): State<ServerState>,
    PathId(id): PathId,
    ValidatedJson(input): ValidatedJson<AtualizarClienteInput>,
) -> Result<Json<models::cliente::Model>, ApiError> {
    let updated = cliente_service::update_cliente(
        &state.db,
        id,
        input.cpf.as_deref(),
        input.nome.as_deref(),
        input.telefone.as_deref(),
    )
    .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
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
    cliente_service::delete_cliente(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
