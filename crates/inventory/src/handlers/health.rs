//! Health check endpoint.

use inventory_core::inventory::ApiResponse;

/// GET /health - Basic liveness probe.
///
/// Returns 200 with no body. Does not touch the store.
pub fn health() -> ApiResponse {
    ApiResponse::empty(200)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_is_ok_without_body() {
        let response = health();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, None);
        assert_eq!(response.content_type(), Some("application/json"));
    }
}
