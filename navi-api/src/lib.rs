pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod results;
pub mod routes;
pub mod storage;

pub use storage::{Database, DbConnection};
