//! Form field validation.
//!
//! A fluent API for checking plain string values before they leave the
//! client. Each field reports at most one error: the first rule it fails.
//!
//! # Example
//!
//! ```
//! use clinic_lib::validation::Validator;
//!
//! let result = Validator::new()
//!     .field("username", "")
//!         .required("Username is required")
//!     .field("email", "nurse@clinic.org")
//!         .non_empty("Email is required")
//!         .email("Invalid email format")
//!     .validate();
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.error_for("username"), Some("Username is required"));
//! assert_eq!(result.error_for("email"), None);
//! ```

mod result;
mod validator;

pub use result::FieldValidationError;
pub use result::ValidationResult;
pub use validator::FieldBuilder;
pub use validator::Validator;
pub use validator::EMAIL_PATTERN;
