pub mod admin;
pub mod auth;
pub mod basket;
pub mod manufacturers;
