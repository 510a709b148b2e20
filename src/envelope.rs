//! Request envelope: composition over the deep `extends BaseRequest`
//! hierarchies of generated SDKs. Any request record can be wrapped together
//! with the cross-cutting metadata the transport consumes; the record itself
//! stays a plain value object.

use std::collections::BTreeMap;
use std::time::Duration;

/// Per-request knobs owned by the transport: attempt timeout, extra headers
/// and an endpoint override. Absent values mean "use the client default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    timeout: Option<Duration>,
    headers: BTreeMap<String, String>,
    endpoint: Option<String>,
}

impl RequestMetadata {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

/// A request record plus its transport metadata. The envelope adds no
/// validation and performs no I/O; it only keeps the two halves together
/// until hand-off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestEnvelope<T> {
    payload: T,
    metadata: RequestMetadata,
}

impl<T> RequestEnvelope<T> {
    pub fn new(payload: T) -> Self {
        RequestEnvelope {
            payload,
            metadata: RequestMetadata::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.metadata.timeout = Some(timeout);
        self
    }

    /// Adds one custom header. Later values for the same name win; header
    /// uniqueness is not a model concern.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.metadata.endpoint = Some(endpoint.into());
        self
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    pub fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }
}
