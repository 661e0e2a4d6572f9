//! Folio: an in-memory blog content library with a text front end.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
