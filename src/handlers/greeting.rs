use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;

/// Catch-all handler - greeting built from the configured prefix
///
/// Every path without a dedicated route lands here. These servers have no
/// notion of a 404: any path, any method, the answer is 200.
pub async fn greeting_handler(State(state): State<AppState>) -> (StatusCode, String) {
    (
        StatusCode::OK,
        format!("{} - Hello World!", state.config.prefix),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_greeting_uses_prefix() {
        let state = AppState {
            config: Arc::new(Config {
                prefix: "v2".to_string(),
            }),
        };

        let (status, body) = greeting_handler(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "v2 - Hello World!");
    }

    #[tokio::test]
    async fn test_greeting_with_empty_prefix() {
        let state = AppState {
            config: Arc::new(Config {
                prefix: String::new(),
            }),
        };

        let (_, body) = greeting_handler(State(state)).await;

        assert_eq!(body, " - Hello World!");
    }
}
