use crate::{
	route::user::model::{NewUser, User, UserPost},
	Database,
};

use super::UserStore;

/// A [`UserStore`] backed by a PostgreSQL pool.
#[derive(Clone, Debug)]
pub struct PgStore {
	database: Database,
}

impl PgStore {
	pub fn new(database: Database) -> Self {
		Self { database }
	}
}

#[axum::async_trait]
impl UserStore for PgStore {
	#[tracing::instrument(skip(self), err)]
	async fn list_users(&self) -> sqlx::Result<Vec<User>> {
		sqlx::query_as::<_, User>("SELECT id, username FROM users")
			.fetch_all(&self.database)
			.await
	}

	#[tracing::instrument(skip(self), err)]
	async fn get_user_by_id(&self, id: i64) -> sqlx::Result<Option<User>> {
		sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = $1")
			.bind(id)
			.fetch_optional(&self.database)
			.await
	}

	#[tracing::instrument(skip(self), err)]
	async fn list_posts_for_user(&self, user_id: i64) -> sqlx::Result<Vec<UserPost>> {
		sqlx::query_as::<_, UserPost>(
			r#"
				SELECT p.id, u.username, p.contents
				FROM posts AS p
				JOIN users AS u ON u.id = p.user_id
				WHERE p.user_id = $1
			"#,
		)
		.bind(user_id)
		.fetch_all(&self.database)
		.await
	}

	/// The insert only hands back the generated id, so the row is read again
	/// to pick up anything the store filled in.
	#[tracing::instrument(skip(self), err)]
	async fn create_user(&self, user: &NewUser) -> sqlx::Result<User> {
		let id = sqlx::query_scalar::<_, i64>("INSERT INTO users (username) VALUES ($1) RETURNING id")
			.bind(&user.username)
			.fetch_one(&self.database)
			.await?;

		self.get_user_by_id(id)
			.await?
			.ok_or(sqlx::Error::RowNotFound)
	}
}
