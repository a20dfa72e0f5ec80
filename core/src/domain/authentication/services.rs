use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::{
    authentication::{
        entities::JwtClaim,
        ports::AuthenticationService,
        value_objects::{Identity, LoginInput, LoginOutput},
    },
    cargo::ports::CargoRepository,
    common::{entities::app_errors::CoreError, services::Service},
    grupo_permissao::ports::GrupoPermissaoRepository,
    health::ports::HealthCheckRepository,
    idoso::ports::IdosoRepository,
    modelo_pia::ports::ModeloPiaRepository,
    relatorio_nutricional::ports::{
        RegistroAntropometricoRepository, SemiologiaNutricionalRepository,
    },
    storage::ports::ObjectStoragePort,
    usuario::ports::UsuarioRepository,
};

pub fn hash_senha(senha: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(senha.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            CoreError::InternalServerError
        })
}

pub fn verificar_senha(senha: &str, hash: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        tracing::error!("Stored password hash is malformed: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(Argon2::default()
        .verify_password(senha.as_bytes(), &parsed)
        .is_ok())
}

impl<U, CA, G, I, M, SN, RA, H, OS> AuthenticationService for Service<U, CA, G, I, M, SN, RA, H, OS>
where
    U: UsuarioRepository,
    CA: CargoRepository,
    G: GrupoPermissaoRepository,
    I: IdosoRepository,
    M: ModeloPiaRepository,
    SN: SemiologiaNutricionalRepository,
    RA: RegistroAntropometricoRepository,
    H: HealthCheckRepository,
    OS: ObjectStoragePort,
{
    async fn login(&self, input: LoginInput) -> Result<LoginOutput, CoreError> {
        let credencial = self
            .usuario_repository
            .get_credencial_by_email(&input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        if !verificar_senha(&input.senha, &credencial.senha_hash)? {
            return Err(CoreError::InvalidCredentials);
        }
        if !credencial.usuario.is_ativo() {
            return Err(CoreError::InvalidCredentials);
        }

        let now = Utc::now();
        let expira_em = now + Duration::seconds(self.jwt.ttl_seconds);
        let claims = JwtClaim {
            sub: credencial.usuario.id,
            email: credencial.usuario.email.clone(),
            iat: now.timestamp(),
            exp: expira_em.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt.secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to sign access token: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(LoginOutput {
            token,
            expira_em,
            usuario: credencial.usuario,
        })
    }

    async fn authenticate(&self, token: &str) -> Result<Identity, CoreError> {
        let claims = decode::<JwtClaim>(
            token,
            &DecodingKey::from_secret(self.jwt.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            CoreError::InvalidCredentials
        })?
        .claims;

        let usuario = self
            .usuario_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;
        if !usuario.is_ativo() {
            return Err(CoreError::InvalidCredentials);
        }

        let cargo = self
            .cargo_repository
            .get_by_id(usuario.id_cargo)
            .await?
            .ok_or(CoreError::InternalServerError)?;
        let grupo = self
            .grupo_permissao_repository
            .get_by_id(cargo.id_grupo_permissao)
            .await?
            .ok_or(CoreError::InternalServerError)?;

        Ok(Identity {
            usuario,
            permissoes: grupo.permissoes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_senha("s3nha-forte").unwrap();
        assert!(verificar_senha("s3nha-forte", &hash).unwrap());
        assert!(!verificar_senha("outra-senha", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        assert!(matches!(
            verificar_senha("qualquer", "not-a-phc-string"),
            Err(CoreError::InternalServerError)
        ));
    }
}
