//! Form state machines.

mod registration;

pub use registration::RegistrationErrors;
pub use registration::RegistrationField;
pub use registration::RegistrationForm;
pub use registration::Route;
pub use registration::SubmitOutcome;
pub use registration::DEFAULT_FAILURE_MESSAGE;
pub use registration::MIN_PASSWORD_LENGTH;
pub use registration::SUCCESS_MESSAGE;
