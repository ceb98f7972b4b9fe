pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod menu;
pub mod progress;
pub mod recipes;
pub mod render;
pub mod sink;
pub mod theme;

pub use config::Dirs;
pub use error::CoverError;
