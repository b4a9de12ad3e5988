//! Application services layer.

pub mod cache;
pub mod data_files;
pub mod error;
pub mod greeting;
pub mod messages;
pub mod repos;
pub mod users;
