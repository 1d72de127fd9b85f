pub mod db;
pub mod cliente;
pub mod veiculo;
pub mod agendamento;
