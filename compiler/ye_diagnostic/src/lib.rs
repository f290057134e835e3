//! Diagnostics for the ye pipeline.
//!
//! Each stage reports its failure as a typed error; drivers turn those into
//! a [`Diagnostic`] (error code, message, labelled spans, notes) and hand it
//! to an emitter.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
