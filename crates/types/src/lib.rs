//! Shared types for the relay kit
//!
//! This crate contains the domain types shared by the pricing, relay client
//! and configuration crates.

pub mod blocks;
pub mod error;
pub mod relay;
pub mod utils;

// Re-export commonly used types
pub use blocks::*;
pub use error::{ConfigError, PricingError, RelayError, RelayKitError, Result, SigningError};
pub use relay::*;
