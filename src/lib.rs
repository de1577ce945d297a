//! `objects-http` is an async client and end-to-end test toolkit for a REST
//! CRUD "objects" API (the restful-api.dev shape).
//!
//! The crate wraps the resource with ergonomic pieces:
//! - [`ObjectsClient`] — verb dispatch, URL building, paginated aggregation
//! - [`ApiResponse::validate`] — parse-then-validate response checking
//! - [`retry`] — bounded exponential backoff around any fallible operation
//! - [`ObjectsService`] — CRUD façade used by the test suites
//! - [`generator`] — random device payloads for test data

mod auth;
mod client;
mod config;
pub mod endpoint;
mod error;
pub mod generator;
mod options;
mod retry;
mod service;
mod types;
mod validate;

pub use auth::{AuthManager, TokenState, TokenStatus};
pub use client::ObjectsClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use options::{RequestOptions, RetryPolicy, DEFAULT_RETRY_POLICY};
pub use retry::retry;
pub use service::ObjectsService;
pub use types::{ApiObject, DeviceData, Page, TokenResponse};
pub use validate::ApiResponse;

pub type Result<T> = std::result::Result<T, ApiError>;
