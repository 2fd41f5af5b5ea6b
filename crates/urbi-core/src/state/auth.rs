//! Session state.

use crate::error::ApiError;
use crate::model::User;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginPending,
    LoginFulfilled { user: User, token: String },
    LoginRejected(String),
    /// Session loaded from storage on start-up.
    Restored { user: User, token: String },
    /// No usable stored session; not an error.
    RestoreFailed,
    Logout,
    ClearError,
}

impl AuthState {
    /// Whether `err` means the current session is no longer accepted.
    pub fn is_expired_by(&self, err: &ApiError) -> bool {
        self.is_authenticated && err.is_unauthorized()
    }

    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::LoginPending => {
                self.is_loading = true;
                self.error = None;
            }
            AuthAction::LoginFulfilled { user, token } | AuthAction::Restored { user, token } => {
                self.is_loading = false;
                self.is_authenticated = true;
                self.user = Some(user);
                self.token = Some(token);
                self.error = None;
            }
            AuthAction::LoginRejected(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            AuthAction::RestoreFailed => self.is_loading = false,
            AuthAction::Logout => {
                self.user = None;
                self.token = None;
                self.is_authenticated = false;
                self.error = None;
            }
            AuthAction::ClearError => self.error = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            phone_number: "+15550100".to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_session_expired_only_by_unauthorized_while_signed_in() {
        let unauthorized = ApiError::from_response(401, "", "Failed to load link hits");
        let mut state = AuthState::default();
        assert!(!state.is_expired_by(&unauthorized));

        state.apply(AuthAction::Restored {
            user: user(),
            token: "t".to_string(),
        });
        assert!(state.is_expired_by(&unauthorized));
        assert!(!state.is_expired_by(&ApiError::NoConnection));
        assert!(!state.is_expired_by(&ApiError::from_response(500, "", "x")));
    }

    #[test]
    fn test_login_flow() {
        let mut state = AuthState::default();
        state.apply(AuthAction::LoginPending);
        assert!(state.is_loading);

        state.apply(AuthAction::LoginFulfilled {
            user: user(),
            token: "t".to_string(),
        });
        assert!(!state.is_loading);
        assert!(state.is_authenticated);
        assert_eq!(state.token.as_deref(), Some("t"));
    }

    #[test]
    fn test_login_rejected_keeps_error_until_cleared() {
        let mut state = AuthState::default();
        state.apply(AuthAction::LoginPending);
        state.apply(AuthAction::LoginRejected("Login failed".to_string()));
        assert!(!state.is_loading);
        assert!(!state.is_authenticated);
        assert_eq!(state.error.as_deref(), Some("Login failed"));

        state.apply(AuthAction::LoginPending);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_restore_failure_is_silent() {
        let mut state = AuthState::default();
        state.apply(AuthAction::RestoreFailed);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_logout_clears_session() {
        let mut state = AuthState::default();
        state.apply(AuthAction::Restored {
            user: user(),
            token: "t".to_string(),
        });
        state.apply(AuthAction::Logout);
        assert_eq!(state, AuthState::default());
    }
}
