//! The network capability the loader consumes.
//!
//! A [`Transport`] turns a target into a fully buffered [`RawResponse`].
//! Status handling and body decoding are left to the caller, so a transport
//! only fails when no response arrived at all.

mod http;

pub use http::HttpTransport;

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{ParseError, TransportError};

/// A buffered response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Numeric HTTP status code (e.g. `200`, `404`).
    pub status: u16,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Performs the actual network call for a target.
pub trait Transport {
    fn fetch(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

impl<Tr: Transport> Transport for &Tr {
    fn fetch(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        (**self).fetch(target)
    }
}

impl<Tr: Transport> Transport for Arc<Tr> {
    fn fetch(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        (**self).fetch(target)
    }
}
