use axum::{extract::State, Json};
use macros::route;

use crate::{
	error::Error,
	extract::{UserBody, ValidUser},
	openapi::tag,
	store::Store,
};

use super::model;

/// List users
/// Returns every user, in the order the store yields them.
#[route(tag = tag::USER)]
pub async fn list_users(State(store): State<Store>) -> Result<Json<Vec<model::User>>, Error> {
	let users = store.list_users().await?;

	Ok(Json(users))
}

/// Get user
/// Returns a single user by its unique id.
#[route(tag = tag::USER, error(status = 404, description = "No user has this id."))]
pub async fn get_user(ValidUser(user): ValidUser) -> Json<model::User> {
	Json(user)
}

/// Get user posts
/// Returns the posts written by a user, each carrying the author's username.
#[route(tag = tag::USER, error(status = 404, description = "No user has this id."))]
pub async fn get_user_posts(
	State(store): State<Store>,
	ValidUser(user): ValidUser,
) -> Result<Json<Vec<model::UserPost>>, Error> {
	let posts = store.list_posts_for_user(user.id).await?;

	Ok(Json(posts))
}

/// Create user
/// Creates a new user and returns it as stored.
#[route(
	tag = tag::USER,
	response(status = 200, description = "The created user.", shape = "Json<model::User>"),
	error(status = 400, description = "The body has no username.")
)]
pub async fn create_user(
	State(store): State<Store>,
	UserBody(input): UserBody,
) -> Result<Json<model::User>, Error> {
	let user = store.create_user(&input).await?;

	tracing::info!(id = user.id, "created user");

	Ok(Json(user))
}

/// Update user
/// Updates an existing user by its unique id. Not implemented yet.
#[route(
	tag = tag::USER,
	error(status = 400, description = "The body has no username."),
	error(status = 404, description = "No user has this id."),
	error(status = 501, description = "Updating users is not implemented.")
)]
pub async fn update_user(
	ValidUser(_user): ValidUser,
	UserBody(_input): UserBody,
) -> Result<Json<model::User>, Error> {
	Err(Error::NotImplemented("updating a user"))
}

/// Delete user
/// Deletes an existing user by its unique id. Not implemented yet.
#[route(
	tag = tag::USER,
	error(status = 404, description = "No user has this id."),
	error(status = 501, description = "Deleting users is not implemented.")
)]
pub async fn delete_user(ValidUser(_user): ValidUser) -> Result<(), Error> {
	Err(Error::NotImplemented("deleting a user"))
}
