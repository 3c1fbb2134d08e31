//! Domain models for the seed certification workflow

pub mod application;
pub mod inspector;
pub mod submission;
pub mod user;

pub use application::*;
pub use inspector::*;
pub use submission::*;
pub use user::*;
