//! Relay client for the Flashbots relay
//!
//! This crate signs JSON-RPC requests for the relay, sends bundle and
//! private transaction calls, queries searcher and bundle stats, and reads
//! the public blocks API.

pub mod client;
pub mod request;
pub mod signer;
pub mod transport;

pub use client::*;
pub use request::*;
pub use signer::*;
pub use transport::*;
