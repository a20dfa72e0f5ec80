use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::usuario::entities::Usuario;

/// Authenticated caller: the user plus the permission codes of its
/// cargo's permission group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub usuario: Usuario,
    pub permissoes: Vec<String>,
}

impl Identity {
    pub fn has_permission(&self, code: &str) -> bool {
        self.permissoes.iter().any(|p| p == code || p == "*")
    }
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginOutput {
    pub token: String,
    pub expira_em: DateTime<Utc>,
    pub usuario: Usuario,
}
