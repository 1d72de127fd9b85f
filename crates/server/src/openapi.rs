use utoipa::OpenApi;

use crate::schemas::{
    AgendamentoDetalhe, AtualizarAgendamentoInput, AtualizarClienteInput, AtualizarVeiculoInput,
    ClienteDetalhe, ClienteResumo, CriarAgendamentoInput, CriarClienteInput, CriarVeiculoInput,
    VeiculoDetalhe, VeiculoResumo,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clientes::criar,
        crate::routes::clientes::listar,
        crate::routes::clientes::buscar,
        crate::routes::clientes::atualizar,
        crate::routes::clientes::remover,
        crate::routes::veiculos::criar,
        crate::routes::veiculos::listar,
        crate::routes::veiculos::buscar,
        crate::routes::veiculos::por_cliente,
        crate::routes::veiculos::atualizar,
        crate::routes::veiculos::remover,
        crate::routes::agendamentos::criar,
        crate::routes::agendamentos::listar,
        crate::routes::agendamentos::por_veiculo,
        crate::routes::agendamentos::por_cliente,
        crate::routes::agendamentos::atualizar,
        crate::routes::agendamentos::remover,
    ),
    components(
        schemas(
            CriarClienteInput,
            AtualizarClienteInput,
            CriarVeiculoInput,
            AtualizarVeiculoInput,
            CriarAgendamentoInput,
            AtualizarAgendamentoInput,
            ClienteResumo,
            VeiculoResumo,
            ClienteDetalhe,
            VeiculoDetalhe,
            AgendamentoDetalhe,
        )
    ),
    tags(
        (name = "health"),
        (name = "clientes", description = "Cadastro de clientes"),
        (name = "veiculos", description = "Cadastro de veículos"),
        (name = "agendamentos", description = "Agendamentos de serviço")
    )
)]
pub struct ApiDoc;
