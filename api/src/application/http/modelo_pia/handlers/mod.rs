pub mod create_modelo_pia;
pub mod delete_modelo_pia;
pub mod get_modelo_pia;
pub mod get_modelos_pia;
