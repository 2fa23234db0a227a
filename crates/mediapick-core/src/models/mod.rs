//! Data models for a pick request
//!
//! Each sub-module covers one stage of the request lifecycle: what the caller
//! asked for, what the platform returned, and what the caller receives.

mod request;
mod result;
mod selection;

pub use request::*;
pub use result::*;
pub use selection::*;
