//! Model domain - leaderboard rows and the registry that builds them

mod entity;
mod registry;

pub use entity::Model;
pub use registry::build_models;
