pub mod app_errors;

pub const SITUACAO_ATIVO: &str = "ATIVO";
pub const SITUACAO_INATIVO: &str = "INATIVO";
