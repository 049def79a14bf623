//! xemphim library
//!
//! Catalog client and cache layer for the OPhim movie API, exposed for the
//! binary and for integration tests.

pub mod cache;
pub mod catalog;
pub mod cli;
