use crate::domain::common::entities::app_errors::CoreError;

pub trait HealthCheckService: Send + Sync {
    /// Round-trips the database and reports the latency in milliseconds.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
