//! Feature modules.
//!
//! Each module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers with OpenAPI annotations
//! - `service.rs`: business logic, independent of axum
//! - `repository.rs`: persistence behind a trait
//! - `router.rs`: route table and the middleware attached to each route

pub mod users;
