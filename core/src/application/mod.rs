use crate::domain::common::{RecantoConfig, services::Service};
use crate::infrastructure::{
    cargo::repository::PostgresCargoRepository,
    db::postgres::{Postgres, PostgresConfig},
    grupo_permissao::repository::PostgresGrupoPermissaoRepository,
    health::repository::PostgresHealthCheckRepository,
    idoso::repositories::idoso_repository::PostgresIdosoRepository,
    modelo_pia::repository::PostgresModeloPiaRepository,
    object_storage::minio::MinioObjectStorage,
    relatorio_nutricional::repositories::{
        registro_repository::PostgresRegistroAntropometricoRepository,
        semiologia_repository::PostgresSemiologiaNutricionalRepository,
    },
    usuario::repositories::usuario_repository::PostgresUsuarioRepository,
};

pub type RecantoService = Service<
    PostgresUsuarioRepository,
    PostgresCargoRepository,
    PostgresGrupoPermissaoRepository,
    PostgresIdosoRepository,
    PostgresModeloPiaRepository,
    PostgresSemiologiaNutricionalRepository,
    PostgresRegistroAntropometricoRepository,
    PostgresHealthCheckRepository,
    MinioObjectStorage,
>;

/// Composition root: connects to Postgres, runs migrations and wires every
/// repository into the aggregate service.
pub async fn create_service(config: RecantoConfig) -> Result<RecantoService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    let object_storage = MinioObjectStorage::new(config.object_storage.clone());

    Ok(Service::new(
        PostgresUsuarioRepository::new(db.clone()),
        PostgresCargoRepository::new(db.clone()),
        PostgresGrupoPermissaoRepository::new(db.clone()),
        PostgresIdosoRepository::new(db.clone()),
        PostgresModeloPiaRepository::new(db.clone()),
        PostgresSemiologiaNutricionalRepository::new(db.clone()),
        PostgresRegistroAntropometricoRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        object_storage,
        config.jwt,
    ))
}
