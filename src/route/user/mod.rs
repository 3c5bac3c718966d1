use aide::axum::{routing::get_with, ApiRouter};

use crate::AppState;

pub mod model;
pub mod route;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/",
			get_with(list_users, list_users_docs).post_with(create_user, create_user_docs),
		)
		.api_route(
			"/:id",
			get_with(get_user, get_user_docs)
				.put_with(update_user, update_user_docs)
				.delete_with(delete_user, delete_user_docs),
		)
		.api_route("/:id/posts", get_with(get_user_posts, get_user_posts_docs))
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_list_users() {
		let store = MemoryStore::default();
		store.add_user("alice");
		store.add_user("bob");

		let app = app(store);
		let response = app.get("/users").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(
			response.json::<Value>(),
			json!([
				{ "id": 1, "username": "alice" },
				{ "id": 2, "username": "bob" },
			])
		);
	}

	#[tokio::test]
	async fn test_list_users_empty() {
		let app = app(MemoryStore::default());
		let response = app.get("/users").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>(), json!([]));
	}

	#[tokio::test]
	async fn test_get_user() {
		let store = MemoryStore::default();
		let alice = store.add_user("alice");

		let app = app(store);
		let response = app.get(&format!("/users/{}", alice.id)).await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<User>(), alice);
	}

	#[tokio::test]
	async fn test_get_unknown_user() {
		let app = app(MemoryStore::default());

		for path in ["/users/42", "/users/abc", "/users/42/posts"] {
			let response = app.get(path).await;

			assert_eq!(response.status_code(), 404, "{path}");
			assert_eq!(
				response.json::<Value>(),
				json!({ "message": "invalid id" }),
				"{path}"
			);
		}
	}

	#[tokio::test]
	async fn test_create_user_round_trip() {
		let app = app(MemoryStore::default());

		let response = app
			.post("/users")
			.json(&json!({ "username": "alice" }))
			.await;

		assert_eq!(response.status_code(), 200);

		let created = response.json::<User>();

		assert_eq!(created.username, "alice");

		let response = app.get(&format!("/users/{}", created.id)).await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<User>(), created);
	}

	#[tokio::test]
	async fn test_create_user_requires_username() {
		let app = app(MemoryStore::default());

		for body in [json!({}), json!({ "username": "" }), json!({ "name": "alice" })] {
			let response = app.post("/users").json(&body).await;

			assert_eq!(response.status_code(), 400, "{body}");
			assert_eq!(
				response.json::<Value>(),
				json!({ "message": "body must include username" })
			);
		}

		let response = app.post("/users").await;

		assert_eq!(response.status_code(), 400);

		let response = app.post("/users").text("username=alice").await;

		assert_eq!(response.status_code(), 400);
	}

	#[tokio::test]
	async fn test_create_user_requires_json_content_type() {
		let app = app(MemoryStore::default());

		let response = app.post("/users").text(r#"{"username":"alice"}"#).await;

		assert_eq!(response.status_code(), 400);
		assert_eq!(
			response.json::<Value>(),
			json!({ "message": "body must include username" })
		);

		let response = app.get("/users").await;

		assert_eq!(response.json::<Value>(), json!([]));
	}

	#[tokio::test]
	async fn test_user_posts() {
		let store = MemoryStore::default();
		let alice = store.add_user("alice");
		let bob = store.add_user("bob");
		let carol = store.add_user("carol");

		store.add_post(alice.id, "hello");
		store.add_post(alice.id, "world");
		store.add_post(bob.id, "unrelated");

		let app = app(store);

		let response = app.get(&format!("/users/{}/posts", alice.id)).await;
		assert_eq!(response.status_code(), 200);

		let posts = response.json::<Vec<UserPost>>();
		assert_eq!(posts.len(), 2);
		assert!(posts.iter().all(|post| post.username == "alice"));
		assert_eq!(
			posts.iter().map(|post| post.contents.as_str()).collect::<Vec<_>>(),
			["hello", "world"]
		);

		let response = app.get(&format!("/users/{}/posts", carol.id)).await;
		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>(), json!([]));
	}

	#[tokio::test]
	async fn test_update_user_not_implemented() {
		let store = MemoryStore::default();
		let alice = store.add_user("alice");

		let app = app(store);
		let path = format!("/users/{}", alice.id);

		let response = app
			.put("/users/42")
			.json(&json!({ "username": "bob" }))
			.await;
		assert_eq!(response.status_code(), 404);

		let response = app.put("/users/42").json(&json!({})).await;
		assert_eq!(response.status_code(), 404);

		let response = app.put(&path).json(&json!({})).await;
		assert_eq!(response.status_code(), 400);

		let response = app.put(&path).json(&json!({ "username": "bob" })).await;
		assert_eq!(response.status_code(), 501);
		assert_eq!(
			response.json::<Value>(),
			json!({ "message": "updating a user is not implemented" })
		);
	}

	#[tokio::test]
	async fn test_delete_user_not_implemented() {
		let store = MemoryStore::default();
		let alice = store.add_user("alice");

		let app = app(store);

		let response = app.delete("/users/42").await;
		assert_eq!(response.status_code(), 404);

		let response = app.delete(&format!("/users/{}", alice.id)).await;
		assert_eq!(response.status_code(), 501);
		assert_eq!(
			response.json::<Value>(),
			json!({ "message": "deleting a user is not implemented" })
		);
	}

	#[tokio::test]
	async fn test_store_failures() {
		let app = app(FailingStore);
		let expected = json!({ "message": FailingStore::error().to_string() });

		let response = app.get("/users").await;
		assert_eq!(response.status_code(), 500);
		assert_eq!(response.json::<Value>(), expected);

		let response = app.get("/users/1").await;
		assert_eq!(response.status_code(), 500);
		assert_eq!(response.json::<Value>(), expected);

		let response = app.get("/users/1/posts").await;
		assert_eq!(response.status_code(), 500);

		let response = app
			.post("/users")
			.json(&json!({ "username": "alice" }))
			.await;
		assert_eq!(response.status_code(), 500);
		assert_eq!(response.json::<Value>(), expected);

		// the server keeps serving after a failure
		let response = app.post("/users").json(&json!({})).await;
		assert_eq!(response.status_code(), 400);
	}

	#[tokio::test]
	async fn test_user_posts_store_failure() {
		let store = PostsFailingStore::default();
		let alice = store.users.add_user("alice");

		let app = app(store);
		let response = app.get(&format!("/users/{}/posts", alice.id)).await;

		assert_eq!(response.status_code(), 500);
		assert_eq!(
			response.json::<Value>(),
			json!({ "message": FailingStore::error().to_string() })
		);

		// the lookup itself still works
		let response = app.get(&format!("/users/{}", alice.id)).await;
		assert_eq!(response.status_code(), 200);
	}
}
