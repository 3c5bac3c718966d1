use std::sync::Arc;

use aide::{
	axum::{routing::get, ApiRouter, IntoApiResponse},
	openapi::OpenApi,
};
use axum::{response::IntoResponse, Extension, Json};

use crate::AppState;

pub fn routes() -> ApiRouter<AppState> {
	ApiRouter::new().route("/api.json", get(serve_docs))
}

/// Serves the generated `OpenAPI` document.
async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
	Json(api.as_ref()).into_response()
}
