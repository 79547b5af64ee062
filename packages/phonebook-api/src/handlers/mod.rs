//! HTTP endpoint implementations for the entry collection and items.

mod collection;
mod item;

pub use collection::{create_entry, list_entries};
pub use item::{delete_entry, update_entry};

use std::fmt;

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use serde_json::{Map, Value};
use tokio::time;

use crate::router::ApiError;

/// Builds a JSON response.
fn json_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, ApiError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}

/// Builds an empty response (for 204 No Content).
fn empty_response(status: u16) -> Result<Response<Bytes>, ApiError> {
    Response::builder()
        .status(status)
        .body(Bytes::new())
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}

/// Reads the request body, bounded by the configured timeout.
async fn read_body_with_timeout<B>(req: Request<B>, timeout_ms: u64) -> Result<Bytes, ApiError>
where
    B: Body,
    B::Error: fmt::Display,
{
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, req.collect())
        .await
        .map_err(|_| ApiError::Timeout)?
        .map_err(|e| ApiError::Internal(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Parses a request body as a JSON object.
fn parse_object(body: &Bytes) -> Result<Map<String, Value>, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON in request body: {}", e)))
}
