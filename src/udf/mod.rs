//! Host-neutral function call surface
//!
//! A query engine hands each call a row of scalar cells and expects a
//! single cell back. This module checks names and argument counts once,
//! when a call is set up, and converts cells to and from the typed
//! functions in [`crate::geometry`] and [`crate::photometry`].

mod function;
mod registry;
mod value;

pub use function::Udf;
pub use registry::{DEFAULT_PREFIX, Registry};
pub use value::Value;
