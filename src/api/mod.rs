pub mod auth;
pub mod bugs;
pub mod frontend;
pub mod health;
pub mod swagger;
