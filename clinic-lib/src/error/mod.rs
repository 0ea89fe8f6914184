//! Error types

mod api;

pub use api::*;
pub use crate::validation::FieldValidationError;
