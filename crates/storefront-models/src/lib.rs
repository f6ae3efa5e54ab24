//! # Storefront Models
//!
//! Domain models and request/response DTOs for the Storefront API.
//!
//! - [`users`]: persisted user record, its public view, registration and login DTOs
//! - [`products`]: new-product request body

pub mod products;
pub mod users;

pub use products::NewProductDto;
pub use users::{LoginCredentials, LoginResponse, NewUserDto, NewUserRecord, User, UserRecord};
