use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
pub struct User {
	/// The unique identifier of the user, assigned by the store.
	pub id: i64,
	/// The username that is displayed to the public.
	pub username: String,
}

/// A post joined with the username of its author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
pub struct UserPost {
	/// The unique identifier of the post.
	pub id: i64,
	/// The username of the user that wrote the post.
	pub username: String,
	/// The text of the post.
	pub contents: String,
}

/// The body accepted when writing a user.
///
/// Every field is optional at the deserialization level so that a missing
/// username is reported through validation rather than a parse error.
#[derive(Debug, Deserialize, Validate, JsonSchema)]
pub struct UserInput {
	/// The username of the user.
	#[validate(required, length(min = 1))]
	pub username: Option<String>,
}

/// A validated user ready to be written to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
	pub username: String,
}

impl TryFrom<UserInput> for NewUser {
	type Error = validator::ValidationErrors;

	fn try_from(input: UserInput) -> Result<Self, Self::Error> {
		input.validate()?;

		let username = input.username.ok_or_else(|| {
			let mut errors = validator::ValidationErrors::new();
			errors.add("username", validator::ValidationError::new("required"));
			errors
		})?;

		Ok(Self { username })
	}
}

/// The path parameter naming a user, used only to document routes.
#[derive(Deserialize, JsonSchema)]
pub struct UserPath {
	/// The unique identifier of the user.
	#[allow(dead_code)]
	pub id: i64,
}
