//! Urbi Admin Core Library
//!
//! Platform-independent logic for the admin client: QR placement geometry,
//! the drag state machine, REST payload models and the application state
//! reducers. Nothing in here touches the DOM, so everything is testable on
//! native targets.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod drag;
pub mod error;
pub mod format;
pub mod geometry;
pub mod media;
pub mod model;
pub mod placement;
pub mod state;

pub use config::{AppConfig, Endpoints};
pub use drag::{DragController, DragPhase};
pub use error::{ApiError, StorageError};
pub use geometry::{ContainerRect, GrabOffset, MarkerLayout, ASPECT_RATIO};
pub use placement::Placement;
pub use state::{AppAction, AppState};
