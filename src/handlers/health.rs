use axum::http::StatusCode;

/// GET /health handler - liveness probe
///
/// Always answers 200 `ok`; there is no backing dependency to check, so a
/// response at all means the process is up.
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_body() {
        let (status, body) = health_handler().await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
