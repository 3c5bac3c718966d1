mod user;

pub use user::{UserBody, ValidUser};
