use crate::domain::common::JwtConfig;

/// Aggregate service over every repository port. Domain service traits are
/// implemented for this struct in each module's `services.rs`.
#[derive(Clone)]
pub struct Service<U, CA, G, I, M, SN, RA, H, OS> {
    pub usuario_repository: U,
    pub cargo_repository: CA,
    pub grupo_permissao_repository: G,
    pub idoso_repository: I,
    pub modelo_pia_repository: M,
    pub semiologia_repository: SN,
    pub registro_repository: RA,
    pub health_check_repository: H,
    pub object_storage: OS,
    pub jwt: JwtConfig,
}

impl<U, CA, G, I, M, SN, RA, H, OS> Service<U, CA, G, I, M, SN, RA, H, OS> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        usuario_repository: U,
        cargo_repository: CA,
        grupo_permissao_repository: G,
        idoso_repository: I,
        modelo_pia_repository: M,
        semiologia_repository: SN,
        registro_repository: RA,
        health_check_repository: H,
        object_storage: OS,
        jwt: JwtConfig,
    ) -> Self {
        Self {
            usuario_repository,
            cargo_repository,
            grupo_permissao_repository,
            idoso_repository,
            modelo_pia_repository,
            semiologia_repository,
            registro_repository,
            health_check_repository,
            object_storage,
            jwt,
        }
    }
}
