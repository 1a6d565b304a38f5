pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod render;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};
