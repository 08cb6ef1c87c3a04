//! notesd - a small notes HTTP service
//!
//! notesd keeps a single append-only collection of notes and exposes it over HTTP:
//! - `GET /ping` liveness check
//! - `GET /notes` lists every note in creation order
//! - `POST /notes` creates a note
//!
//! Notes live either in process memory or in a single Postgres table.

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod timefmt;
pub mod types;

pub use error::{Error, Result};
