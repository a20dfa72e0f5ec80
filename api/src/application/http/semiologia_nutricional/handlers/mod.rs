pub mod create_semiologia;
pub mod delete_semiologia;
pub mod get_semiologia;
pub mod get_semiologias;
pub mod update_semiologia;
