pub mod cargo;
pub mod db;
pub mod grupo_permissao;
pub mod health;
pub mod idoso;
pub mod modelo_pia;
pub mod object_storage;
pub mod query;
pub mod relatorio_nutricional;
pub mod usuario;
