//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and maps failures into `ApiError`; `types`
//! defines the wire schema.

pub mod api;
pub mod types;
