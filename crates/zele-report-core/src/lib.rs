//! zele-report core - metrics model, validation, and error handling

pub mod error;
pub mod metrics;
pub mod source;

pub use error::{Error, Result};
pub use metrics::*;
