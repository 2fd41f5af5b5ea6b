mod use_document_drag;
mod use_element_width;
mod use_media_seek;

pub use use_document_drag::use_document_drag;
pub use use_element_width::use_element_width;
pub use use_media_seek::use_media_seek;
