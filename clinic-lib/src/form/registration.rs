//! Account registration form.

use crate::auth::AuthApi;
use crate::auth::RegisterRequest;
use crate::store::AuthAction;
use crate::store::AuthStore;
use crate::validation::ValidationResult;
use crate::validation::Validator;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Message dispatched to the store after the server accepts a registration.
pub const SUCCESS_MESSAGE: &str = "Registration successful!";

/// Banner text when the server gives no reason for a failure.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

/// Input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Username,
    Email,
    Password,
}

impl RegistrationField {
    pub const ALL: [Self; 3] = [Self::Username, Self::Email, Self::Password];

    /// Name used in validation errors and the request body.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline messages under each field plus the banner above the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Remote failure, shown as a banner.
    pub general: Option<String>,
}

impl RegistrationErrors {
    pub fn get(&self, field: RegistrationField) -> Option<&str> {
        match field {
            RegistrationField::Username => self.username.as_deref(),
            RegistrationField::Email => self.email.as_deref(),
            RegistrationField::Password => self.password.as_deref(),
        }
    }

    fn slot(&mut self, field: RegistrationField) -> &mut Option<String> {
        match field {
            RegistrationField::Username => &mut self.username,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
        }
    }

    /// Returns `true` if nothing needs to be shown.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Where the view should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
        }
    }
}

/// Result of [`RegistrationForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent.
    Invalid,
    /// Account created; the view should navigate.
    Navigate(Route),
    /// The server rejected the request or could not be reached.
    Failed,
}

/// Values and errors of the registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    data: RegisterRequest,
    errors: RegistrationErrors,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Username => &self.data.username,
            RegistrationField::Email => &self.data.email,
            RegistrationField::Password => &self.data.password,
        }
    }

    pub fn errors(&self) -> &RegistrationErrors {
        &self.errors
    }

    /// The user typed into `field`. Clears that field's error and the banner.
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RegistrationField::Username => self.data.username = value,
            RegistrationField::Email => self.data.email = value,
            RegistrationField::Password => self.data.password = value,
        }
        *self.errors.slot(field) = None;
        self.errors.general = None;
    }

    /// Checks every field and replaces the inline errors with the result.
    /// The banner is cleared as well.
    pub fn validate(&mut self) -> ValidationResult {
        let result = Validator::new()
            .field(RegistrationField::Username.as_str(), self.data.username.as_str())
            .required("Username is required")
            .field(RegistrationField::Email.as_str(), self.data.email.as_str())
            .non_empty("Email is required")
            .email("Invalid email format")
            .field(RegistrationField::Password.as_str(), self.data.password.as_str())
            .non_empty("Password is required")
            .min_length(
                MIN_PASSWORD_LENGTH,
                format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
            )
            .validate();

        for field in RegistrationField::ALL {
            *self.errors.slot(field) = result.error_for(field.as_str()).map(str::to_owned);
        }
        self.errors.general = None;

        result
    }

    /// Validates, then sends the registration through `api`.
    ///
    /// The store's loading flag is raised for the duration of the remote call
    /// and always lowered afterwards. Failures are not retried.
    pub async fn submit(&mut self, api: &dyn AuthApi, store: &mut AuthStore) -> SubmitOutcome {
        if self.validate().is_invalid() {
            log::debug!("Registration form invalid: {:?}", self.errors);
            return SubmitOutcome::Invalid;
        }

        store.dispatch(AuthAction::LoadingToggle(true));
        let result = api.register(&self.data).await;

        let outcome = match result {
            Ok(_) => {
                log::info!("Registered user {:?}", self.data.username);
                store.dispatch(AuthAction::SignupConfirmed(SUCCESS_MESSAGE.to_string()));
                SubmitOutcome::Navigate(Route::Login)
            }
            Err(e) => {
                log::warn!("Registration failed: {}", e);
                let message = e
                    .server_message()
                    .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                    .to_string();
                self.errors.general = Some(message.clone());
                store.dispatch(AuthAction::SignupFailed(message));
                SubmitOutcome::Failed
            }
        };

        store.dispatch(AuthAction::LoadingToggle(false));
        outcome
    }
}
