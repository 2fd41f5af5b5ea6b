//! UI components for the admin client.

mod alert_container;
mod modal;
mod qr_glyph;
mod qr_position_helper;
mod require_auth;
mod status_badge;
mod top_bar;

pub use alert_container::AlertContainer;
pub use modal::Modal;
pub use qr_glyph::{QrGlyph, qr_svg};
pub use qr_position_helper::QrPositionHelper;
pub use require_auth::RequireAuth;
pub use status_badge::StatusBadge;
pub use top_bar::TopBar;
