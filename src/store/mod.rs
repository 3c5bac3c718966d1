mod postgres;

use std::sync::Arc;

pub use postgres::PgStore;

use crate::route::user::model::{NewUser, User, UserPost};

/// A shared handle to the user store, held in the application state.
pub type Store = Arc<dyn UserStore>;

/// Read and write access to users and their posts.
///
/// Absence is not an error: lookups return `None` when nothing matches, and
/// only store failures (connectivity, constraints, malformed queries) are
/// reported through [`sqlx::Error`].
#[axum::async_trait]
pub trait UserStore: Send + Sync {
	/// Returns every user, in the order the store yields them.
	async fn list_users(&self) -> sqlx::Result<Vec<User>>;

	/// Returns the user with the given id, if any.
	async fn get_user_by_id(&self, id: i64) -> sqlx::Result<Option<User>>;

	/// Returns the posts written by the given user, each with the author's username.
	async fn list_posts_for_user(&self, user_id: i64) -> sqlx::Result<Vec<UserPost>>;

	/// Inserts a user and returns the stored row.
	async fn create_user(&self, user: &NewUser) -> sqlx::Result<User>;
}
