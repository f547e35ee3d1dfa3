use crate::handlers::{greeting_handler, health_handler, newroute_handler};
use crate::routes;
use crate::state::AppState;
use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::any;
use tower_http::trace::TraceLayer;

/// Router for the v2 server.
///
/// `/health` and `/newroute` are special-cased by exact path; everything else
/// falls through to the greeting. Routes accept any method.
pub fn v2_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, any(health_handler))
        .route(routes::NEW_ROUTE, any(newroute_handler))
        .fallback(greeting_handler)
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the v3 server.
///
/// No special-cased routes: every path and method gets the greeting. The
/// omission of `/health` and `/newroute` relative to v2 is deliberate.
pub fn v3_router(state: AppState) -> Router {
    Router::new()
        .fallback(greeting_handler)
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Logs one line per incoming request with the requested URL.
async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!("received request for url: {}", request.uri());
    next.run(request).await
}
