pub mod comments_service;
pub mod favorites_service;
pub mod registration_service;

pub use comments_service::*;
pub use favorites_service::*;
pub use registration_service::*;
