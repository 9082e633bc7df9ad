//! HTTPS test client pinned to a caller-supplied root certificate.
//!
//! The client trusts exactly the certificates found in the PEM file passed
//! on the command line and nothing else, so it can talk to a server running
//! with a self-signed certificate while still rejecting everyone else.

pub mod cli;
pub mod client;
pub mod entry;
pub mod error;
pub mod trust;

pub use cli::{Args, Mode};
pub use entry::LogEntry;
pub use error::ClientError;
