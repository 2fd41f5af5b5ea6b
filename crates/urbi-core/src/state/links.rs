//! Short-link list state.

use crate::model::Link;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkState {
    pub links: Vec<Link>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    FetchPending,
    FetchFulfilled(Vec<Link>),
    FetchRejected(String),
    CreatePending,
    CreateFulfilled(Link),
    CreateRejected(String),
    ClearError,
}

impl LinkState {
    pub fn apply(&mut self, action: LinkAction) {
        match action {
            LinkAction::FetchPending | LinkAction::CreatePending => {
                self.is_loading = true;
                self.error = None;
            }
            LinkAction::FetchFulfilled(links) => {
                self.is_loading = false;
                self.links = links;
            }
            LinkAction::CreateFulfilled(link) => {
                self.is_loading = false;
                self.links.insert(0, link);
            }
            LinkAction::FetchRejected(message) | LinkAction::CreateRejected(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            LinkAction::ClearError => self.error = None,
        }
    }
}
