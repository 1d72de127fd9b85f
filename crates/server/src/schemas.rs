//! Request shapes with declarative validation rules, and the response
//! shapes that embed related-entity summaries.

use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use models::{agendamento, cliente, veiculo};

static RE_CPF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").unwrap());
// Legacy ABC1234 or Mercosul ABC1D23
static RE_PLACA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{3}[0-9]{4}|[A-Z]{3}[0-9][A-Z][0-9]{2})$").unwrap());
static RE_CHASSI: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]+$").unwrap());

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarClienteInput {
    #[validate(regex(path = *RE_CPF, message = "CPF deve ter 11 caracteres numéricos"))]
    pub cpf: String,
    #[validate(length(min = 3, max = 100, message = "O nome deve ter entre 3 e 100 caracteres"))]
    pub nome: String,
    #[validate(length(min = 9, max = 15, message = "Telefone deve ter entre 9 e 15 dígitos"))]
    pub telefone: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarClienteInput {
    #[validate(regex(path = *RE_CPF, message = "CPF deve ter 11 caracteres numéricos"))]
    pub cpf: Option<String>,
    #[validate(length(min = 3, max = 100, message = "O nome deve ter entre 3 e 100 caracteres"))]
    pub nome: Option<String>,
    #[validate(length(min = 9, max = 15, message = "Telefone deve ter entre 9 e 15 dígitos"))]
    pub telefone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarVeiculoInput {
    #[validate(regex(path = *RE_PLACA, message = "Placa inválida. Formato permitido: ABC1234 ou ABC1D23"))]
    pub placa: String,
    #[validate(
        length(max = 17, message = "Chassi deve ter no máximo 17 caracteres"),
        regex(path = *RE_CHASSI, message = "Chassi deve conter apenas letras maiúsculas e números")
    )]
    pub chassi: String,
    #[validate(length(min = 2, max = 100, message = "Modelo deve ter entre 2 e 100 caracteres"))]
    pub modelo: String,
    // range validated at the service layer against the current year
    pub ano: Option<i32>,
    #[validate(range(min = 1, message = "ID do cliente deve ser positivo"))]
    pub cliente_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarVeiculoInput {
    #[validate(regex(path = *RE_PLACA, message = "Placa inválida. Formato permitido: ABC1234 ou ABC1D23"))]
    pub placa: Option<String>,
    #[validate(
        length(max = 17, message = "Chassi deve ter no máximo 17 caracteres"),
        regex(path = *RE_CHASSI, message = "Chassi deve conter apenas letras maiúsculas e números")
    )]
    pub chassi: Option<String>,
    #[validate(length(min = 2, max = 100, message = "Modelo deve ter entre 2 e 100 caracteres"))]
    pub modelo: Option<String>,
    pub ano: Option<i32>,
    #[validate(range(min = 1, message = "ID do cliente deve ser positivo"))]
    pub cliente_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarAgendamentoInput {
    #[validate(length(min = 2, max = 255, message = "Motivo deve ter entre 2 e 255 caracteres"))]
    pub motivo: String,
    #[validate(length(max = 500, message = "Descrição deve ter no máximo 500 caracteres"))]
    pub descricao: Option<String>,
    #[validate(range(min = 1, message = "ID do veículo deve ser positivo"))]
    pub veiculo_id: i32,
    #[validate(range(min = 1, message = "ID do cliente deve ser positivo"))]
    pub cliente_id: i32,
}

/// The cliente/veiculo references are immutable after creation, so the
/// partial update only carries the free-text fields.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarAgendamentoInput {
    #[validate(length(min = 2, max = 255, message = "Motivo deve ter entre 2 e 255 caracteres"))]
    pub motivo: Option<String>,
    #[validate(length(max = 500, message = "Descrição deve ter no máximo 500 caracteres"))]
    pub descricao: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClienteResumo {
    pub nome: String,
    pub cpf: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VeiculoResumo {
    pub placa: String,
    pub modelo: String,
    pub ano: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClienteDetalhe {
    pub id: i32,
    pub cpf: String,
    pub nome: String,
    pub telefone: String,
    pub veiculos: Vec<VeiculoResumo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VeiculoDetalhe {
    pub id: i32,
    pub placa: String,
    pub chassi: String,
    pub modelo: String,
    pub ano: Option<i32>,
    pub cliente_id: Option<i32>,
    pub cliente: Option<ClienteResumo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AgendamentoDetalhe {
    pub id: i32,
    pub motivo: String,
    pub descricao: Option<String>,
    pub veiculo_id: i32,
    pub cliente_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub cliente: Option<ClienteResumo>,
    pub veiculo: Option<VeiculoResumo>,
}

impl From<cliente::Model> for ClienteResumo {
    fn from(c: cliente::Model) -> Self {
        Self { nome: c.nome, cpf: c.cpf }
    }
}

impl From<veiculo::Model> for VeiculoResumo {
    fn from(v: veiculo::Model) -> Self {
        Self { placa: v.placa, modelo: v.modelo, ano: v.ano }
    }
}

impl From<(cliente::Model, Vec<veiculo::Model>)> for ClienteDetalhe {
    fn from((c, veiculos): (cliente::Model, Vec<veiculo::Model>)) -> Self {
        Self {
            id: c.id,
            cpf: c.cpf,
            nome: c.nome,
            telefone: c.telefone,
            veiculos: veiculos.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<(veiculo::Model, Option<cliente::Model>)> for VeiculoDetalhe {
    fn from((v, dono): (veiculo::Model, Option<cliente::Model>)) -> Self {
        Self {
            id: v.id,
            placa: v.placa,
            chassi: v.chassi,
            modelo: v.modelo,
            ano: v.ano,
            cliente_id: v.cliente_id,
            cliente: dono.map(Into::into),
        }
    }
}

impl From<(agendamento::Model, Option<cliente::Model>, Option<veiculo::Model>)> for AgendamentoDetalhe {
    fn from(
        (a, c, v): (agendamento::Model, Option<cliente::Model>, Option<veiculo::Model>),
    ) -> Self {
        Self {
            id: a.id,
            motivo: a.motivo,
            descricao: a.descricao,
            veiculo_id: a.veiculo_id,
            cliente_id: a.cliente_id,
            created_at: a.created_at,
            updated_at: a.updated_at,
            cliente: c.map(Into::into),
            veiculo: v.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente_ok() -> CriarClienteInput {
        CriarClienteInput {
            cpf: "11111111111".into(),
            nome: "Ana".into(),
            telefone: "83912345678".into(),
        }
    }

    #[test]
    fn cliente_input_accepts_valid_shape() {
        assert!(cliente_ok().validate().is_ok());
    }

    #[test]
    fn cpf_must_be_eleven_digits() {
        let mut input = cliente_ok();
        input.cpf = "123".into();
        assert!(input.validate().is_err());
        input.cpf = "1111111111a".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn nome_length_is_bounded() {
        let mut input = cliente_ok();
        input.nome = "ab".into();
        assert!(input.validate().is_err());
        input.nome = "a".repeat(101);
        assert!(input.validate().is_err());
    }

    #[test]
    fn partial_cliente_allows_all_fields_absent() {
        let input = AtualizarClienteInput { cpf: None, nome: None, telefone: None };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn partial_cliente_still_checks_supplied_fields() {
        let input = AtualizarClienteInput {
            cpf: Some("12".into()),
            nome: None,
            telefone: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn placa_accepts_both_formats() {
        for placa in ["ABC1234", "ABC1D23"] {
            let input = CriarVeiculoInput {
                placa: placa.into(),
                chassi: "9BWZZZ377VT004251".into(),
                modelo: "Civic".into(),
                ano: Some(2020),
                cliente_id: None,
            };
            assert!(input.validate().is_ok(), "placa {} should be valid", placa);
        }
    }

    #[test]
    fn placa_rejects_lowercase_and_wrong_shape() {
        for placa in ["abc1234", "AB12345", "ABCD123", ""] {
            let input = CriarVeiculoInput {
                placa: placa.into(),
                chassi: "XYZ123".into(),
                modelo: "Civic".into(),
                ano: None,
                cliente_id: None,
            };
            assert!(input.validate().is_err(), "placa {} should be invalid", placa);
        }
    }

    #[test]
    fn chassi_rejects_lowercase_and_symbols() {
        for chassi in ["xyz123", "ABC-123", "A".repeat(18).as_str()] {
            let input = CriarVeiculoInput {
                placa: "ABC1234".into(),
                chassi: chassi.into(),
                modelo: "Civic".into(),
                ano: None,
                cliente_id: None,
            };
            assert!(input.validate().is_err(), "chassi {} should be invalid", chassi);
        }
    }

    #[test]
    fn agendamento_requires_positive_refs() {
        let input = CriarAgendamentoInput {
            motivo: "Revisão".into(),
            descricao: None,
            veiculo_id: 0,
            cliente_id: 1,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn descricao_is_optional_but_bounded() {
        let mut input = CriarAgendamentoInput {
            motivo: "Revisão".into(),
            descricao: None,
            veiculo_id: 1,
            cliente_id: 1,
        };
        assert!(input.validate().is_ok());
        input.descricao = Some("x".repeat(501));
        assert!(input.validate().is_err());
    }
}
