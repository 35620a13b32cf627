pub mod auth;
pub mod common;
pub mod exercise;
pub mod news;
pub mod prelude;
pub mod resource;
pub mod study;
pub mod user;
