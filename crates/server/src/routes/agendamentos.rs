use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::ApiError;
use crate::extract::{PathId, ValidatedJson};
use crate::routes::ServerState;
use crate::schemas::{AgendamentoDetalhe, AtualizarAgendamentoInput, CriarAgendamentoInput};
use service::agendamento_service;

#[utoipa::path(
    post, path = "/agendamentos", tag = "agendamentos",
    request_body = CriarAgendamentoInput,
    responses(
        (status = 201, description = "Created", body = AgendamentoDetalhe),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Cliente or veiculo not found"),
        (status = 422, description = "Veiculo does not belong to the cliente")
    )
)]
pub async fn criar(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<CriarAgendamentoInput>,
) -> Result<(StatusCode, Json<models::agendamento::Model>), ApiError> {
    let created = agendamento_service::create_agendamento(
        &state.db,
        &input.motivo,
        input.descricao.as_deref(),
        input.veiculo_id,
        input.cliente_id,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/agendamentos", tag = "agendamentos",
    responses((status = 200, description = "All agendamentos, or a notice when none exist", body = [AgendamentoDetalhe]))
)]
pub async fn listar(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let rows = agendamento_service::list_agendamentos(&state.db).await?;
    if rows.is_empty() {
        return Ok(
            Json(serde_json::json!({ "message": "Nenhum agendamento cadastrado ainda." }))
                .into_response(),
        );
    }
    let out: Vec<AgendamentoDetalhe> = rows.into_iter().map(Into::into).collect();
    Ok(Json(out).into_response())
}

#[utoipa::path(
    get, path = "/agendamentos/veiculo/{id}", tag = "agendamentos",
    params(("id" = i32, Path, description = "Veiculo ID")),
    responses(
        (status = 200, description = "Agendamentos of the veiculo", body = [AgendamentoDetalhe]),
        (status = 404, description = "Veiculo not found")
    )
)]
pub async fn por_veiculo(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> Result<Json<Vec<AgendamentoDetalhe>>, ApiError> {
    let rows = agendamento_service::agendamentos_do_veiculo(&state.db, id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/agendamentos/cliente/{id}", tag = "agendamentos",
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "Agendamentos of the cliente", body = [AgendamentoDetalhe]),
        (status = 404, description = "Cliente not found")
    )
)]
pub async fn por_cliente(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> Result<Json<Vec<AgendamentoDetalhe>>, ApiError> {
    let rows = agendamento_service::agendamentos_do_cliente(&state.db, id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    put, path = "/agendamentos/{id}", tag = "agendamentos",
    params(("id" = i32, Path, description = "Agendamento ID")),
    request_body = AtualizarAgendamentoInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn atualizar(
    State(state): State<ServerState>,
    PathId(id): PathId,
    ValidatedJson(input): ValidatedJson<AtualizarAgendamentoInput>,
) -> Result<Json<models::agendamento::Model>, ApiError> {
    let updated = agendamento_service::update_agendamento(
        &state.db,
        id,
        input.motivo.as_deref(),
        input.descricao.as_deref(),
    )
    .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/agendamentos/{id}", tag = "agendamentos",
    params(("id" = i32, Path, description = "Agendamento ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn remover(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    agendamento_service::delete_agendamento(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
