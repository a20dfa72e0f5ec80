use axum::extract::{Multipart, Path, State};
use recanto_core::domain::usuario::{
    entities::Usuario, ports::UsuarioService, value_objects::UploadFotoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadFotoResponse {
    pub data: Usuario,
}

#[utoipa::path(
    post,
    path = "/{usuario_id}/upload-foto",
    tag = "usuario",
    summary = "Upload usuario photo",
    description = "Multipart upload of the `foto` field; the stored URL is persisted on the usuario.",
    params(
        ("usuario_id" = Uuid, Path, description = "Usuario id"),
    ),
    responses(
        (status = 200, body = UploadFotoResponse)
    )
)]
pub async fn upload_foto(
    Path(usuario_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<UploadFotoResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("multipart inválido: {e}")))?
    {
        if field.name() != Some("foto") {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let payload = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("falha ao ler o arquivo: {e}")))?;

        let usuario = state
            .service
            .upload_foto(
                identity,
                UploadFotoInput {
                    usuario_id,
                    content_type,
                    payload,
                },
            )
            .await
            .map_err(ApiError::from)?;

        return Ok(Response::OK(UploadFotoResponse { data: usuario }));
    }

    Err(ApiError::BadRequest(
        "campo `foto` ausente no multipart".to_string(),
    ))
}
