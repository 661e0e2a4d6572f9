//! Application services layer.

pub mod archive;
pub mod authors;
pub mod blog;
pub mod error;
pub mod events;
pub mod repos;
