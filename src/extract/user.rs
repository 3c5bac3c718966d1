use aide::OperationInput;
use axum::{
	extract::{FromRef, FromRequest, FromRequestParts, Path, Request},
	http::request,
	Json,
};

use crate::{
	error::Error,
	route::user::model::{NewUser, User, UserInput, UserPath},
	store::Store,
};

/// Resolves the `:id` path parameter into a stored user.
///
/// If the id is not an integer or no user has it, an [`Error::InvalidId`] is returned.
/// Store failures are forwarded as [`Error::Database`].
///
/// ```rust
/// async fn route(ValidUser(user): ValidUser) {
///   println!("{}", user.username);
/// }
/// ```
#[derive(Debug)]
pub struct ValidUser(pub User);

#[axum::async_trait]
impl<S> FromRequestParts<S> for ValidUser
where
	Store: FromRef<S>,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let Ok(Path(id)) = Path::<String>::from_request_parts(parts, state).await else {
			return Err(Error::InvalidId);
		};

		let id = id.parse::<i64>().map_err(|_| Error::InvalidId)?;

		let store = Store::from_ref(state);
		let user = store.get_user_by_id(id).await?;

		user.map(Self).ok_or(Error::InvalidId)
	}
}

impl OperationInput for ValidUser {
	fn operation_input(ctx: &mut aide::gen::GenContext, operation: &mut aide::openapi::Operation) {
		Path::<UserPath>::operation_input(ctx, operation);
	}
}

/// Extracts a JSON user body with a non-empty `username`.
///
/// Anything else, including an empty body, a body that is not JSON, or a request
/// without a JSON `Content-Type`, is rejected with [`Error::MissingUsername`].
#[derive(Debug)]
pub struct UserBody(pub NewUser);

#[axum::async_trait]
impl<S> FromRequest<S> for UserBody
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let Json(input) = Json::<UserInput>::from_request(req, state)
			.await
			.map_err(|_| Error::MissingUsername)?;

		NewUser::try_from(input)
			.map(Self)
			.map_err(|_| Error::MissingUsername)
	}
}

impl OperationInput for UserBody {
	fn operation_input(ctx: &mut aide::gen::GenContext, operation: &mut aide::openapi::Operation) {
		Json::<UserInput>::operation_input(ctx, operation);
	}
}
