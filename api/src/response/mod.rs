//! Response handling.
//!
//! A [`ResponseFormat`] turns the raw body of a successful response into the
//! endpoint's output type.

mod format;

pub use format::{JsonFormat, ResponseFormat};
