// Social Development Events - API server
//
// CRUD backend for community events plus the membership registry
// (join/leave with duplicate-join prevention). Stores are injected behind
// traits so the HTTP surface can be exercised without Postgres.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
