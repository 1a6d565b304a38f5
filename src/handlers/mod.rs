pub mod health;
pub mod landing;
pub mod reference;

pub use health::{health_check, liveness_check, readiness_check};
pub use landing::landing_page;
pub use reference::{api_reference, serve_spec};
