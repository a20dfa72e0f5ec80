pub mod create_usuario;
pub mod delete_usuario;
pub mod get_usuario;
pub mod get_usuarios;
pub mod update_usuario;
pub mod upload_foto;
