use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for object storage (MinIO/S3). Keys are relative to the single
/// application bucket.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Public URL under which an uploaded object can be fetched.
    fn public_url(&self, object_key: &str) -> String;
}
