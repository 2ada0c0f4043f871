//! Application configuration

pub mod config;
pub mod loader;

pub use self::config::AppConfig;
pub use self::loader::load_config;
