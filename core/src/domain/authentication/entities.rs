use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}
