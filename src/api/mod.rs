use axum::{
    http::{StatusCode, Uri},
    routing::{get, post},
};

use crate::{api::error::ApiError, state::AppState};

pub mod bills;
pub mod error;
pub mod webhook;

pub type Result<T> = std::result::Result<T, ApiError>;

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(index))
        .route("/favicon.ico", get(favicon))
        .nest("/api/bills", bills::router())
        .route("/webhook", post(webhook::receive))
        .fallback(not_found)
}

async fn index() -> &'static str {
    "hello world"
}

async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(&uri)
}

/// `Json` extractor wrapper that maps body rejections into the relay's error
/// shape instead of axum's plain-text default.
pub struct Json<T>(pub T);

impl<S, T> axum::extract::FromRequest<S> for Json<T>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(
        req: axum::http::Request<axum::body::Body>,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(e) => Err(ApiError::validation(e.to_string())),
        }
    }
}
