//! Command implementations.

pub mod config;
pub mod index;

pub use self::config::execute_config;
pub use self::index::execute_index;
