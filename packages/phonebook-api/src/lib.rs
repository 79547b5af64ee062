//! REST API for the phonebook service.
//!
//! Routes the collection path (`/`) and item path (`/{id}`) to the
//! entry handlers and serves them over hyper.

pub mod handlers;
pub mod router;
pub mod server;
