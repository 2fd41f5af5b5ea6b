//! Application state container.
//!
//! One slice per concern, each with its own action enum and a pure reducer.
//! The client holds a single [`AppState`] and dispatches [`AppAction`]s; side
//! effects (HTTP, storage) happen outside and report back through actions.

mod alerts;
mod auth;
mod links;
mod videos;

pub use alerts::{Alert, AlertAction, AlertState, Severity};
pub use auth::{AuthAction, AuthState};
pub use links::{LinkAction, LinkState};
pub use videos::{VideoAction, VideoState};

/// Every slice of client-side state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub videos: VideoState,
    pub links: LinkState,
    pub alerts: AlertState,
}

/// Action routed to exactly one slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Auth(AuthAction),
    Video(VideoAction),
    Link(LinkAction),
    Alert(AlertAction),
}

impl From<AuthAction> for AppAction {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<VideoAction> for AppAction {
    fn from(action: VideoAction) -> Self {
        Self::Video(action)
    }
}

impl From<LinkAction> for AppAction {
    fn from(action: LinkAction) -> Self {
        Self::Link(action)
    }
}

impl From<AlertAction> for AppAction {
    fn from(action: AlertAction) -> Self {
        Self::Alert(action)
    }
}

impl AppState {
    /// Returns the state after `action`.
    #[must_use]
    pub fn reduce(&self, action: AppAction) -> Self {
        let mut next = self.clone();
        match action {
            AppAction::Auth(action) => next.auth.apply(action),
            AppAction::Video(action) => next.videos.apply(action),
            AppAction::Link(action) => next.links.apply(action),
            AppAction::Alert(action) => next.alerts.apply(action),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_only_touch_their_slice() {
        let state = AppState::default();
        let next = state.reduce(AlertAction::show("Saved", Severity::Success).into());
        assert_eq!(next.alerts.alerts.len(), 1);
        assert_eq!(next.auth, state.auth);
        assert_eq!(next.videos, state.videos);
        assert_eq!(next.links, state.links);

        let next = next.reduce(VideoAction::FetchPending.into());
        assert!(next.videos.is_loading);
        assert_eq!(next.alerts.alerts.len(), 1);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let state = AppState::default();
        let _ = state.reduce(LinkAction::FetchPending.into());
        assert!(!state.links.is_loading);
    }
}
