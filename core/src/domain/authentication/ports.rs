use crate::domain::{
    authentication::value_objects::{Identity, LoginInput, LoginOutput},
    common::entities::app_errors::CoreError,
};

pub trait AuthenticationService: Send + Sync {
    /// Verifies the credentials and issues an access token.
    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<LoginOutput, CoreError>> + Send;

    /// Verifies a bearer token and resolves the caller's identity,
    /// including the permission codes of its cargo's group.
    fn authenticate(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
