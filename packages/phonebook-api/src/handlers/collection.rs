//! Collection endpoint handlers (`/`).

use std::fmt;

use hyper::body::{Body, Bytes};
use hyper::{Request, Response};

use phonebook_core::entry::NewEntry;
use phonebook_core::validate::{self, CREATE_REQUIRED, ENTRY_FIELDS};

use crate::router::{ApiError, AppState};

use super::{json_response, parse_object, read_body_with_timeout};

/// Lists all entries.
///
/// # Endpoint
/// `GET /`
///
/// # Response
/// - **200 OK**: JSON array of `{id, firstname, surname, number, address}`.
///   An empty collection serializes as `[]`; a never-supplied address
///   serializes as `null`.
pub async fn list_entries<B>(
    _req: Request<B>,
    state: AppState,
) -> Result<Response<Bytes>, ApiError>
where
    B: Body,
    B::Error: fmt::Display,
{
    let entries = state.store.list()?;
    let json = serde_json::to_vec(&entries)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize response: {}", e)))?;

    json_response(200, json)
}

/// Creates a new entry.
///
/// # Endpoint
/// `POST /`
///
/// # Request Body
/// JSON object with required `firstname`, `surname`, `number` and
/// optional `address`.
///
/// # Response
/// - **201 Created**: `Location: /{id}` header, empty body. The entry
///   is not echoed back.
///
/// # Errors
/// - **400 Bad Request**: unparseable JSON, missing required field,
///   unrecognized field, empty name, or invalid phone number. No row is
///   added on any validation failure.
pub async fn create_entry<B>(req: Request<B>, state: AppState) -> Result<Response<Bytes>, ApiError>
where
    B: Body,
    B::Error: fmt::Display,
{
    let body = read_body_with_timeout(req, state.config.request_timeout_ms).await?;
    let payload = parse_object(&body)?;

    validate::validate(&payload, CREATE_REQUIRED, ENTRY_FIELDS)?;

    let entry = NewEntry::from_payload(&payload)?;
    let id = state.store.create(entry)?;
    tracing::debug!("entry {} created", id);

    Response::builder()
        .status(201)
        .header("Location", format!("/{}", id))
        .body(Bytes::new())
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}
