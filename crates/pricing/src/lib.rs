//! Base fee projection and bundle pricing
//!
//! Pure, synchronous calculations: worst-case base fee growth over a window
//! of future blocks, the base fee a simulated bundle implies for the next
//! block, and realized gas pricing across the transactions of a landed bundle.

pub mod base_fee;
pub mod bundle;

pub use base_fee::*;
pub use bundle::*;
