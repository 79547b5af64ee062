//! Matchit routing configuration and error-to-status mapping.

use std::fmt;
use std::sync::Arc;

use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use matchit::Router as MatchitRouter;

use phonebook_core::config::ServiceConfig;
use phonebook_core::store::EntryStore;
use phonebook_core::{StoreError, ValidationError};

use crate::handlers;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Record store for the entry table
    pub store: Arc<dyn EntryStore>,
    /// Service configuration
    pub config: Arc<ServiceConfig>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router over the given store and configuration.
    pub fn new(store: Arc<dyn EntryStore>, config: Arc<ServiceConfig>) -> Self {
        let mut router = MatchitRouter::new();

        router
            .insert("/", RouteHandler::Collection)
            .expect("Failed to insert collection route");
        router
            .insert("/{id}", RouteHandler::Item)
            .expect("Failed to insert item route");

        Self {
            inner: router,
            state: AppState { store, config },
        }
    }

    /// Routes an incoming request and renders errors as responses.
    ///
    /// Generic over the body type so tests can drive the router with
    /// preassembled bodies while the server passes
    /// `hyper::body::Incoming`.
    pub async fn route<B>(&self, req: Request<B>) -> Response<Bytes>
    where
        B: Body,
        B::Error: fmt::Display,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match self.dispatch(req, &path).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!("{} {} -> {}", method, path, err.status());
                err.into_response()
            }
        }
    }

    async fn dispatch<B>(&self, req: Request<B>, path: &str) -> Result<Response<Bytes>, ApiError>
    where
        B: Body,
        B::Error: fmt::Display,
    {
        match self.inner.at(path) {
            Ok(matched) => {
                let handler = matched.value;
                handler
                    .handle(req, matched.params, self.state.clone())
                    .await
            }
            Err(_) => Err(ApiError::NotFound(format!("No route found for {}", path))),
        }
    }
}

/// Route handler selected by path shape.
enum RouteHandler {
    Collection,
    Item,
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    async fn handle<B>(
        &self,
        req: Request<B>,
        params: matchit::Params<'_, '_>,
        state: AppState,
    ) -> Result<Response<Bytes>, ApiError>
    where
        B: Body,
        B::Error: fmt::Display,
    {
        match self {
            RouteHandler::Collection => {
                if req.method() == Method::GET {
                    handlers::list_entries(req, state).await
                } else if req.method() == Method::POST {
                    handlers::create_entry(req, state).await
                } else {
                    Err(ApiError::MethodNotAllowed)
                }
            }
            RouteHandler::Item => {
                if req.method() == Method::PUT {
                    handlers::update_entry(req, params, state).await
                } else if req.method() == Method::DELETE {
                    handlers::delete_entry(req, params, state).await
                } else {
                    Err(ApiError::MethodNotAllowed)
                }
            }
        }
    }
}

/// Handler error mapped onto an HTTP status code.
///
/// Error responses carry the plain-text message as their body, not a
/// structured JSON envelope.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed,
    Timeout,
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::MethodNotAllowed => 405,
            ApiError::Timeout => 408,
            ApiError::Internal(_) => 500,
        }
    }

    /// Renders the error as a plain-text HTTP response.
    pub fn into_response(self) -> Response<Bytes> {
        if let ApiError::Internal(msg) = &self {
            tracing::warn!("request failed: {}", msg);
        }
        Response::builder()
            .status(self.status())
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(Bytes::from(self.to_string()))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(500)
                    .body(Bytes::from("Internal Server Error"))
                    .expect("Failed to build fallback error response")
            })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            ApiError::Timeout => write!(f, "Request Timeout"),
            ApiError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
