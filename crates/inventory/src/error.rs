use inventory_core::inventory::ApiResponse;

/// Application error type that wraps `anyhow::Error`.
///
/// This allows using `?` on anything convertible into `anyhow::Error` inside
/// the dispatcher. The error itself never reaches the caller: converting it
/// into a response logs it and yields the generic server error.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn into_response(self) -> ApiResponse {
        tracing::error!(error = %self.0, "Unhandled error");
        ApiResponse::internal_error()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
