use aide::{openapi::Tag, transform::TransformOpenApi};
use axum::Json;

use crate::error;

pub mod tag {
	pub const USER: &str = "User";
}

pub fn docs(api: TransformOpenApi) -> TransformOpenApi {
	api.title("Users API")
		.summary("A users resource and its posts")
		.description("Create, read and list users, and read the posts they wrote.")
		.tag(Tag {
			name: tag::USER.into(),
			description: Some("User management".into()),
			..Default::default()
		})
		.default_response_with::<Json<error::Message>, _>(|res| {
			res.example(error::Message {
				message: "invalid id".into(),
			})
		})
}
