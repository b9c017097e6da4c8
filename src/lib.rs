#![doc = include_str!("../README.md")]

pub use crate::error::Error;
pub use crate::median::Median;
pub use crate::types::*;
pub use crate::udf::{Registry, Udf, Value};

mod error;
pub mod geometry;
pub mod median;
pub mod photometry;
mod types;
pub mod udf;
