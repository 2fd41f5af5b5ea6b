//! Browser test helpers: mounting components and synthesizing mouse input.

use std::time::Duration;

use web_sys::{Element, MouseEvent, MouseEventInit};

/// Fresh `<div>` appended to the body, optionally with a stylesheet so that
/// mounted components get a real layout.
pub fn mount_root(css: &str) -> Element {
    let document = gloo::utils::document();
    if !css.is_empty() {
        let style = document.create_element("style").unwrap();
        style.set_text_content(Some(css));
        gloo::utils::head().append_child(&style).unwrap();
    }
    let root = document.create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();
    root
}

/// Yields so the scheduler can flush pending renders and effects.
pub async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(10)).await;
}

pub fn mouse_event(kind: &str, client_x: i32, client_y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(client_x);
    init.set_client_y(client_y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

pub fn dispatch_on(target: &Element, kind: &str, client_x: i32, client_y: i32) {
    target
        .dispatch_event(&mouse_event(kind, client_x, client_y))
        .unwrap();
}

pub fn dispatch_on_document(kind: &str, client_x: i32, client_y: i32) {
    gloo::utils::document()
        .dispatch_event(&mouse_event(kind, client_x, client_y))
        .unwrap();
}
