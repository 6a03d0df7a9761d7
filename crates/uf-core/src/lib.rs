//! uf-core: conversion engine for unitflow.
//!
//! Contains:
//! - catalog (the fixed set of named conversions + lookup)
//! - convert (validation, clamping, dispatch)
//! - error (shared error types)
//! - numeric (Real + tolerances + float helpers)
//!
//! # Example
//!
//! ```
//! use uf_core::convert;
//!
//! let degrees_f = convert("CelsiusToFahrenheit", 100.0).unwrap();
//! assert_eq!(degrees_f, 212.0);
//! ```

pub mod catalog;
pub mod convert;
pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use catalog::{Category, ConversionEntry, TempScale, catalog, conversions_in, find_conversion};
pub use convert::{ABSOLUTE_ZERO_C, MAGNITUDE_LIMIT, clamp_magnitude, convert};
pub use error::{ConvertError, ConvertResult};
pub use numeric::*;
