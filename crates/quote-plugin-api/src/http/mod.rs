//! HTTP interface module.
//!
//! - `GET /health`: liveness probe used by Core
//! - `POST /run`: capability invocation

pub mod handlers;
pub mod routes;
