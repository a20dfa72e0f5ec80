use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

/// Fails with `Forbidden` when the identity's permission group does not
/// carry the given permission code.
pub fn ensure_permission(identity: &Identity, code: &str) -> Result<(), CoreError> {
    if identity.has_permission(code) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "missing permission `{code}`"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{authentication::value_objects::Identity, usuario::entities::Usuario};

    fn identity_with(permissoes: Vec<String>) -> Identity {
        Identity {
            usuario: Usuario::fixture(),
            permissoes,
        }
    }

    #[test]
    fn grants_when_code_present() {
        let identity = identity_with(vec!["idoso.ler".to_string()]);
        assert!(ensure_permission(&identity, "idoso.ler").is_ok());
    }

    #[test]
    fn grants_on_wildcard() {
        let identity = identity_with(vec!["*".to_string()]);
        assert!(ensure_permission(&identity, "idoso.excluir").is_ok());
    }

    #[test]
    fn denies_when_code_absent() {
        let identity = identity_with(vec!["idoso.ler".to_string()]);
        assert!(matches!(
            ensure_permission(&identity, "idoso.excluir"),
            Err(CoreError::Forbidden(_))
        ));
    }
}
