//! `hwstock-core` — validation building blocks.
//!
//! This crate contains the **pure** validation contract shared by every
//! inventory kind (no logging setup, no I/O).

pub mod error;
pub mod label;
pub mod validate;
pub mod value_object;

pub use error::{ValidationError, ValidationResult};
pub use label::Label;
pub use validate::{require, validate, validate_value};
pub use value_object::ValueObject;
