//! Core components of the client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`YfClient`] and its builder.
//! - The primary [`YfError`] type.
//! - The [`Transport`] seam the client sends requests through.

/// The main client (`YfClient`), builder, and session handling.
pub mod client;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// Pluggable HTTP layer.
pub mod transport;

pub(crate) mod dates;
pub(crate) mod net;
pub(crate) mod wire;


#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{Session, YfClient, YfClientBuilder};
pub use error::YfError;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportFuture};
