//! Collaborator services consumed by the contents API.
//!
//! Each service is a trait so the HTTP layer can run against any backend; the
//! `Memory*` implementations keep everything in a shared [`db::Store`].

pub mod authentication_service;
pub mod content_service;
pub mod error;
pub mod user_service;

pub use authentication_service::{AuthenticationService, MemoryAuthenticationService};
pub use content_service::{ContentPage, ContentService, MemoryContentService};
pub use error::{ServiceError, ServiceResult};
pub use user_service::{MemoryUserService, UserService};
