//! Validator builder for fluent validation API.

use std::sync::LazyLock;

use regex::Regex;

use super::result::FieldValidationError;
use super::result::ValidationResult;

/// Loose email shape accepted by the registration form: something, an `@`,
/// something, a dot, something. No whitespace anywhere in the three parts.
pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Type alias for validation rule closures.
type Rule = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// A field whose rules have all been attached.
struct FieldEntry {
    name: String,
    value: String,
    rules: Vec<Rule>,
}

impl FieldEntry {
    fn first_error(&self) -> Option<String> {
        self.rules.iter().find_map(|rule| rule(&self.value).err())
    }
}

/// Builder for validating multiple form fields.
///
/// Fields are checked in the order they were added; every field is checked
/// even after an earlier one failed, so the caller can show all inline errors
/// at once.
#[derive(Default)]
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to validate.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            entry: FieldEntry {
                name: name.into(),
                value: value.into(),
                rules: Vec::new(),
            },
        }
    }

    /// Run all validations.
    pub fn validate(self) -> ValidationResult {
        let errors: Vec<_> = self
            .fields
            .iter()
            .filter_map(|field| {
                field
                    .first_error()
                    .map(|message| FieldValidationError::new(field.name.clone(), message))
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    entry: FieldEntry,
}

impl FieldBuilder {
    /// Add a custom validation rule. `f` returns `true` when the value is acceptable.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.entry
            .rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Require the field to contain something other than whitespace.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require the field to be non-empty. Whitespace counts as content.
    pub fn non_empty(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex pattern.
    ///
    /// An invalid pattern rejects every value rather than panicking.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        match Regex::new(pattern) {
            Ok(re) => self.rule(move |v| re.is_match(v), msg),
            Err(e) => {
                log::warn!("Invalid validation pattern {:?}: {}", pattern, e);
                self.rule(|_| false, msg)
            }
        }
    }

    /// Require an email-shaped value (see [`EMAIL_PATTERN`]).
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| {
                if v.is_empty() {
                    true // Empty is valid; use required() or non_empty() for presence
                } else {
                    EMAIL_RE.is_match(v)
                }
            },
            msg,
        )
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        let other = other.into();
        self.rule(move |v| v == other, msg)
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        self.finalize().field(name, value)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(self.entry);
        validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failing_rule_wins() {
        let result = Validator::new()
            .field("password", "abc")
            .non_empty("Password is required")
            .min_length(6, "Too short")
            .max_length(2, "Too long")
            .validate();

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.error_for("password"), Some("Too short"));
    }

    #[test]
    fn test_all_fields_checked() {
        let result = Validator::new()
            .field("a", "")
            .required("a missing")
            .field("b", "")
            .required("b missing")
            .validate();

        let fields: Vec<_> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["a", "b"]);
    }

    #[test]
    fn test_required_trims_but_non_empty_does_not() {
        let result = Validator::new()
            .field("trimmed", "   ")
            .required("required")
            .field("raw", "   ")
            .non_empty("non_empty")
            .validate();

        assert_eq!(result.error_for("trimmed"), Some("required"));
        assert_eq!(result.error_for("raw"), None);
    }

    #[test]
    fn test_email_shape() {
        let check = |v: &str| Validator::new().field("email", v).email("bad").validate();

        assert!(check("gabriel@gmail.com").is_valid());
        assert!(check("a@b.c").is_valid());
        assert!(check("").is_valid());
        assert!(check("bad").is_invalid());
        assert!(check("no-dot@host").is_invalid());
        assert!(check("@host.com").is_invalid());
    }

    #[test]
    fn test_min_length_counts_chars() {
        let result = Validator::new()
            .field("password", "ñññññ")
            .min_length(6, "short")
            .validate();
        assert!(result.is_invalid());

        let result = Validator::new()
            .field("password", "ñññññ1")
            .min_length(6, "short")
            .validate();
        assert!(result.is_valid());
    }

    #[test]
    fn test_pattern_and_equals() {
        let result = Validator::new()
            .field("phone", "9876512345")
            .pattern(r"^\d{10}$", "phone")
            .field("confirm", "secret")
            .equals("secret", "mismatch")
            .validate();
        assert!(result.is_valid());

        let result = Validator::new()
            .field("phone", "98765")
            .pattern("(", "phone")
            .validate();
        assert_eq!(result.error_for("phone"), Some("phone"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Validator::new().validate().into_result(), Ok(()));
        let errors = Validator::new()
            .field("x", "")
            .required("x")
            .validate()
            .into_result()
            .unwrap_err();
        assert_eq!(errors, vec![FieldValidationError::new("x", "x")]);
    }
}
