use axum::http::StatusCode;

/// GET /newroute handler - canary route
///
/// Exists only on the v2 server; hitting it confirms which revision a
/// deployment is actually serving.
pub async fn newroute_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "new Route!")
}
