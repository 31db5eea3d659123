pub mod comments;
pub mod favorites;
pub mod health;
pub mod register;
pub mod swagger;
