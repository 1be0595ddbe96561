pub mod account;
pub mod content;
pub mod credential;
pub mod query;
pub mod user;
