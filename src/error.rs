use std::borrow::Cow;

use aide::OperationOutput;
use axum::{
	body::Body,
	http::{Response, StatusCode},
	response::IntoResponse,
	Json,
};
use schemars::JsonSchema;
use serde::Serialize;

/// Error type for the application.
///
/// Every variant falls into one [`ErrorKind`], which decides the status code.
/// The [`Display`](std::fmt::Display) output is the message sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid id")]
	InvalidId,
	#[error("body must include username")]
	MissingUsername,
	#[error("{0} is not implemented")]
	NotImplemented(&'static str),
	#[error(transparent)]
	Database(#[from] sqlx::Error),
}

/// The broad class of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	/// The referenced entity does not exist.
	NotFound,
	/// The request is malformed or incomplete.
	BadRequest,
	/// The route exists but its operation does not.
	NotImplemented,
	/// The store failed, or something unexpected happened.
	Internal,
}

impl ErrorKind {
	pub fn status(self) -> StatusCode {
		match self {
			Self::NotFound => StatusCode::NOT_FOUND,
			Self::BadRequest => StatusCode::BAD_REQUEST,
			Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
			Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::InvalidId => ErrorKind::NotFound,
			Self::MissingUsername => ErrorKind::BadRequest,
			Self::NotImplemented(..) => ErrorKind::NotImplemented,
			Self::Database(..) => ErrorKind::Internal,
		}
	}
}

/// The body of every error response.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Message {
	/// A human-readable description of what went wrong.
	pub message: Cow<'static, str>,
}

impl IntoResponse for Error {
	fn into_response(self) -> Response<Body> {
		let kind = self.kind();

		if kind == ErrorKind::Internal {
			tracing::error!(error = ?self, "request failed");
		}

		(
			kind.status(),
			Json(Message {
				message: self.to_string().into(),
			}),
		)
			.into_response()
	}
}

impl OperationOutput for Error {
	type Inner = Message;
}
