//! Seeks a media element to a timestamp once its metadata is known.

use gloo::events::EventListener;
use urbi_core::media::{HAVE_METADATA, seek_position};
use web_sys::HtmlMediaElement;
use yew::prelude::*;

fn seek(element: &HtmlMediaElement, target_seconds: f64) {
    let position = seek_position(target_seconds, element.duration());
    tracing::debug!("Seeking preview to {position}s");
    element.set_current_time(position);
}

/// Keeps the element behind `media` positioned at `target_seconds`.
///
/// Runs whenever the source URL or the target changes. If metadata is already
/// available the seek happens immediately; otherwise a one-shot
/// `loadedmetadata` listener is registered, and dropped again on the next
/// change or on unmount.
#[hook]
pub fn use_media_seek(media: NodeRef, media_url: Option<AttrValue>, target_seconds: f64) {
    use_effect_with((media_url, target_seconds), move |(media_url, target_seconds)| {
        let target_seconds = *target_seconds;
        let mut pending = None;

        if media_url.is_some() {
            if let Some(element) = media.cast::<HtmlMediaElement>() {
                if element.ready_state() >= HAVE_METADATA {
                    seek(&element, target_seconds);
                } else {
                    let loaded = element.clone();
                    pending = Some(EventListener::once(&element, "loadedmetadata", move |_| {
                        seek(&loaded, target_seconds);
                    }));
                }
            }
        }

        move || drop(pending)
    });
}

#[cfg(test)]
mod tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::test_util::{mount_root, settle};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct PreviewProps {
        target_seconds: f64,
    }

    /// `<video>` without a source, so it never gets past `HAVE_NOTHING` on
    /// its own.
    #[function_component(Preview)]
    fn preview(props: &PreviewProps) -> Html {
        let media = use_node_ref();
        use_media_seek(
            media.clone(),
            Some(AttrValue::Static("preview.mp4")),
            props.target_seconds,
        );
        html! { <video ref={media} class="preview" /> }
    }

    #[wasm_bindgen_test]
    async fn test_seek_waits_for_metadata_once() {
        let root = mount_root("");
        let handle = yew::Renderer::<Preview>::with_root_and_props(
            root.clone(),
            PreviewProps { target_seconds: 7.0 },
        )
        .render();
        settle().await;

        let video: HtmlMediaElement = root
            .query_selector(".preview")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(video.ready_state() < HAVE_METADATA);
        assert_eq!(video.current_time(), 0.0);

        let loaded = web_sys::Event::new("loadedmetadata").unwrap();
        video.dispatch_event(&loaded).unwrap();
        assert_eq!(video.current_time(), 7.0);

        video.set_current_time(0.0);
        video.dispatch_event(&loaded).unwrap();
        assert_eq!(video.current_time(), 0.0);

        handle.destroy();
    }
}
