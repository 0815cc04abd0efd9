//! Top-level screen selection as an explicit state machine.

use crate::types::AuthMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Chat without a session, with login/signup entry points.
    Anonymous,
    /// The auth modal, in either login or signup mode.
    AuthModal(AuthMode),
    /// Authenticated chat.
    Chat,
    /// Authenticated profile.
    Profile,
}

/// Selects which screen is shown for the lifetime of the process.
///
/// Rendering is a pure function of `current()`; all navigation goes through
/// the transition methods below, and a transition that is not legal from the
/// current state is a no-op. There is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Router {
    current: View,
}

impl Router {
    /// The initial state comes from session restoration: straight to chat
    /// when a token was restored, anonymous otherwise.
    pub fn new(authenticated: bool) -> Self {
        let current = if authenticated {
            View::Chat
        } else {
            View::Anonymous
        };
        Self { current }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn open_auth(&mut self, mode: AuthMode) {
        if self.current == View::Anonymous {
            self.current = View::AuthModal(mode);
        }
    }

    /// Same state, mode flipped. The form clears its error and field values
    /// on this transition.
    pub fn toggle_auth_mode(&mut self) {
        if let View::AuthModal(mode) = self.current {
            self.current = View::AuthModal(match mode {
                AuthMode::Login => AuthMode::Signup,
                AuthMode::Signup => AuthMode::Login,
            });
        }
    }

    pub fn cancel_auth(&mut self) {
        if matches!(self.current, View::AuthModal(_)) {
            self.current = View::Anonymous;
        }
    }

    /// The caller has already committed the token to the session store.
    pub fn auth_succeeded(&mut self) {
        if matches!(self.current, View::AuthModal(_)) {
            self.current = View::Chat;
        }
    }

    pub fn show_chat(&mut self) {
        if matches!(self.current, View::Chat | View::Profile) {
            self.current = View::Chat;
        }
    }

    /// Profile requires an authenticated session, which is exactly the
    /// states this transition is reachable from.
    pub fn show_profile(&mut self) {
        if matches!(self.current, View::Chat | View::Profile) {
            self.current = View::Profile;
        }
    }

    /// The caller clears the session store and resets the transcript; the
    /// default view returns to chat for the next login.
    pub fn logout(&mut self) {
        if matches!(self.current, View::Chat | View::Profile) {
            self.current = View::Anonymous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_follows_restored_session() {
        assert_eq!(Router::new(true).current(), View::Chat);
        assert_eq!(Router::new(false).current(), View::Anonymous);
    }

    #[test]
    fn test_login_flow() {
        let mut router = Router::new(false);
        router.open_auth(AuthMode::Login);
        assert_eq!(router.current(), View::AuthModal(AuthMode::Login));

        router.auth_succeeded();
        assert_eq!(router.current(), View::Chat);
    }

    #[test]
    fn test_cancel_returns_to_anonymous() {
        let mut router = Router::new(false);
        router.open_auth(AuthMode::Signup);
        router.cancel_auth();
        assert_eq!(router.current(), View::Anonymous);
    }

    #[test]
    fn test_toggle_flips_mode_in_place() {
        let mut router = Router::new(false);
        router.open_auth(AuthMode::Login);

        router.toggle_auth_mode();
        assert_eq!(router.current(), View::AuthModal(AuthMode::Signup));

        router.toggle_auth_mode();
        assert_eq!(router.current(), View::AuthModal(AuthMode::Login));
    }

    #[test]
    fn test_navigation_between_authenticated_views() {
        let mut router = Router::new(true);
        router.show_profile();
        assert_eq!(router.current(), View::Profile);

        router.show_chat();
        assert_eq!(router.current(), View::Chat);
    }

    #[test]
    fn test_logout_from_either_authenticated_view() {
        let mut router = Router::new(true);
        router.logout();
        assert_eq!(router.current(), View::Anonymous);

        let mut router = Router::new(true);
        router.show_profile();
        router.logout();
        assert_eq!(router.current(), View::Anonymous);
    }

    #[test]
    fn test_illegal_transitions_are_noops() {
        // Profile is unreachable without a session.
        let mut router = Router::new(false);
        router.show_profile();
        assert_eq!(router.current(), View::Anonymous);

        // Opening the modal only makes sense from anonymous chat.
        let mut router = Router::new(true);
        router.open_auth(AuthMode::Login);
        assert_eq!(router.current(), View::Chat);

        // Success outside the modal changes nothing.
        let mut router = Router::new(false);
        router.auth_succeeded();
        assert_eq!(router.current(), View::Anonymous);

        // Logout is meaningless while anonymous.
        router.logout();
        assert_eq!(router.current(), View::Anonymous);
    }
}
