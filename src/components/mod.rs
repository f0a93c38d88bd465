pub mod message;
pub mod navbar;
