pub mod docs;
pub mod user;
