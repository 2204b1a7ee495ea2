//! Transport layer for the Dokploy SDK.

pub mod http;

pub use http::HttpTransport;
