//! REST client for The Blue Alliance v1 API.
//!
//! This module provides the `ApiClient` used to download season event
//! lists, event details, team details, and match details. Every call
//! returns the raw response text so the resource cache can persist it
//! verbatim before it is decoded.

pub mod client;
pub mod error;

pub use client::{ApiClient, ResourceSource, DEFAULT_API_BASE_URL};
pub use error::ApiError;
