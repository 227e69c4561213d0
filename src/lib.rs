pub mod api;
pub mod config;
pub mod db;
pub mod utils;

pub use config::Settings;
pub use db::Database;
