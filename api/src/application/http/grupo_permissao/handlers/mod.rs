pub mod get_grupo_permissao;
pub mod get_grupos_permissao;
