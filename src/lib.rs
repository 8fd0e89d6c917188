//! HTTP-triggered greeting function for AWS Lambda.
//!
//! The handler reads an optional `name` from the query string or from a JSON
//! request body and always answers `200` with a JSON greeting.

pub mod config;
pub mod greeting;
pub mod handler;
pub mod models;
