//! Authentication flags shared across views.

/// Loading indicator and the last success/error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// A request to the auth API is in flight.
    pub show_loading: bool,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

/// Transitions accepted by [`auth_reducer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Show or hide the loading indicator.
    LoadingToggle(bool),
    /// Registration accepted by the server.
    SignupConfirmed(String),
    /// Registration rejected or the server was unreachable.
    SignupFailed(String),
    ClearMessages,
}

pub fn auth_reducer(state: &AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::LoadingToggle(on) => AuthState {
            show_loading: *on,
            ..state.clone()
        },
        AuthAction::SignupConfirmed(message) => AuthState {
            show_loading: false,
            success_message: Some(message.clone()),
            error_message: None,
        },
        AuthAction::SignupFailed(message) => AuthState {
            show_loading: false,
            success_message: None,
            error_message: Some(message.clone()),
        },
        AuthAction::ClearMessages => AuthState {
            show_loading: state.show_loading,
            success_message: None,
            error_message: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_toggle_keeps_messages() {
        let state = AuthState {
            success_message: Some("ok".into()),
            ..Default::default()
        };
        let next = auth_reducer(&state, &AuthAction::LoadingToggle(true));
        assert!(next.show_loading);
        assert_eq!(next.success_message.as_deref(), Some("ok"));
        assert!(!state.show_loading);
    }

    #[test]
    fn test_signup_outcomes_replace_each_other() {
        let state = auth_reducer(
            &AuthState::default(),
            &AuthAction::SignupFailed("nope".into()),
        );
        assert_eq!(state.error_message.as_deref(), Some("nope"));

        let state = auth_reducer(&state, &AuthAction::SignupConfirmed("welcome".into()));
        assert_eq!(state.success_message.as_deref(), Some("welcome"));
        assert_eq!(state.error_message, None);
        assert!(!state.show_loading);
    }

    #[test]
    fn test_clear_messages() {
        let state = AuthState {
            show_loading: true,
            success_message: Some("a".into()),
            error_message: Some("b".into()),
        };
        let next = auth_reducer(&state, &AuthAction::ClearMessages);
        assert_eq!(
            next,
            AuthState {
                show_loading: true,
                ..Default::default()
            }
        );
    }
}
