//! AWS SSM Model Layer
//!
//! Typed request/response records for an SSM-style systems-management API:
//! value objects with fluent construction, wire-string enums with strict
//! parsing, request envelopes, paginated results and tagged service errors.
//!
//! The transport (HTTP dispatch, signing, retry, marshalling) is an external
//! collaborator: it reads populated request records through their accessors,
//! fills response records through their setters, and raises a `ServiceError`
//! selected by the server's error-type discriminator. Nothing in this crate
//! performs I/O or enforces server-side constraints; records accept any
//! value and defer validation to that boundary.

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate failure_derive;

extern crate failure;
extern crate log;
extern crate paste;
extern crate serde;
extern crate serde_json;

#[macro_use]
mod macros;

pub mod envelope;
pub mod error;
pub mod fmt;
pub mod model;
pub mod pagination;

pub use envelope::{RequestEnvelope, RequestMetadata};
pub use error::{ModelError, ServiceError};
pub use pagination::{for_each_page, PagedRequest, PagedResult};
