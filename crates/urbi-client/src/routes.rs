//! Application routes.

use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Redirects to the video list.
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    /// Video list with the links tab.
    #[at("/videos")]
    Videos,
    /// Upload form.
    #[at("/videos/new")]
    NewVideo,
    #[at("/videos/:id")]
    VideoDetail { id: String },
    /// Shown after a WASM panic.
    #[at("/panic")]
    Panic,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}
