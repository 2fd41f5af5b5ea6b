//! Page components.

mod links_tab;
mod login;
mod not_found;
mod panic;
mod video_detail;
mod video_upload;
mod videos;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use panic::{PanicPage, set_panic_hook};
pub use video_detail::VideoDetailPage;
pub use video_upload::VideoUploadPage;
pub use videos::VideosPage;
