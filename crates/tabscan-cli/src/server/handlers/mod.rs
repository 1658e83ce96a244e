//! API request handlers.

mod data;
mod metrics;

pub use data::*;
pub use metrics::*;
