//! Entity models for the contents API and the in-memory [`store::Store`]
//! that backs the reference collaborator services.

pub mod models;
pub mod store;

pub use store::Store;
