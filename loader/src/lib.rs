//! Asynchronous remote resource loading with a three-state lifecycle.
//!
//! A [`ResourceLoader`] fetches a target through a [`Transport`], decodes the
//! body, and reports `Pending` followed by `Success` or `Failure` to a
//! [`StateSink`]. Loads for a newer target suppress late results from older
//! ones.

pub mod config;
pub mod error;
mod loader;
pub mod request;
pub mod sink;
pub mod state;
pub mod transport;

pub use config::TransportConfig;
pub use error::{InvalidTarget, LoadError, ParseError, TransportError};
pub use loader::ResourceLoader;
pub use request::FetchRequest;
pub use sink::{StateSink, WatchSink};
pub use state::FetchState;
pub use transport::{HttpTransport, RawResponse, Transport};
