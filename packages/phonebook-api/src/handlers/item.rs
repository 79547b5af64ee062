//! Item endpoint handlers (`/{id}`).

use std::fmt;

use hyper::body::{Body, Bytes};
use hyper::{Request, Response};

use phonebook_core::entry::EntryPatch;
use phonebook_core::validate::{self, ValidationError, ENTRY_FIELDS};

use crate::router::{ApiError, AppState};

use super::{empty_response, parse_object, read_body_with_timeout};

/// Parses the id path segment. A non-integer segment addresses nothing.
fn parse_id(params: &matchit::Params<'_, '_>) -> Result<u64, ApiError> {
    let raw = params.get("id").unwrap_or_default();
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("No entry at '/{}'", raw)))
}

/// Partially updates an entry.
///
/// # Endpoint
/// `PUT /{id}`
///
/// # Request Body
/// JSON object with any subset of `firstname`, `surname`, `number`,
/// `address`. Unsupplied fields keep their prior values; `address` may
/// be the empty string or null, `number` may not be empty.
///
/// # Response
/// - **204 No Content**: update applied.
///
/// # Errors
/// - **404 Not Found**: unknown id. The existence check runs before the
///   body is read, so an unknown id wins regardless of body validity.
/// - **400 Bad Request**: unparseable JSON, zero fields, unrecognized
///   field, or a format violation on a supplied field.
pub async fn update_entry<B>(
    req: Request<B>,
    params: matchit::Params<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, ApiError>
where
    B: Body,
    B::Error: fmt::Display,
{
    let id = parse_id(&params)?;
    if !state.store.exists(id)? {
        return Err(ApiError::NotFound(format!("No entry with id {}", id)));
    }

    let body = read_body_with_timeout(req, state.config.request_timeout_ms).await?;
    let payload = parse_object(&body)?;
    if payload.is_empty() {
        return Err(ValidationError::NoFields.into());
    }

    validate::validate(&payload, &[], ENTRY_FIELDS)?;

    let patch = EntryPatch::from_payload(&payload);
    state.store.update(id, patch)?;
    tracing::debug!("entry {} updated", id);

    empty_response(204)
}

/// Deletes an entry.
///
/// # Endpoint
/// `DELETE /{id}`
///
/// # Response
/// - **204 No Content**: entry removed. Hard delete; the id is never
///   resurrected, so a repeated delete answers 404.
///
/// # Errors
/// - **404 Not Found**: unknown id.
pub async fn delete_entry<B>(
    _req: Request<B>,
    params: matchit::Params<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, ApiError>
where
    B: Body,
    B::Error: fmt::Display,
{
    let id = parse_id(&params)?;
    if !state.store.exists(id)? {
        return Err(ApiError::NotFound(format!("No entry with id {}", id)));
    }

    state.store.delete(id)?;
    tracing::debug!("entry {} deleted", id);

    empty_response(204)
}
