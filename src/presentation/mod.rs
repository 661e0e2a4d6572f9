//! Text presentation of library content.

pub mod authors;
pub mod component;
pub mod posts;
pub mod views;

pub use authors::AuthorComponent;
pub use component::Component;
pub use posts::PostComponent;
