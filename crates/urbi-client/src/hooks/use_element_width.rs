//! Rendered width of an element, kept current across window resizes.

use gloo::events::EventListener;
use yew::prelude::*;

/// Returns the width in CSS pixels of the element behind `node`.
///
/// Measured after mount and again on every window `resize`; `0.0` until the
/// element exists.
#[hook]
pub fn use_element_width(node: NodeRef) -> f64 {
    let width = use_state_eq(|| 0.0_f64);

    {
        let width = width.clone();
        use_effect_with(node, move |node| {
            let measure = {
                let node = node.clone();
                move || {
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        width.set(element.get_bounding_client_rect().width());
                    }
                }
            };
            measure();

            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| measure());
            move || drop(listener)
        });
    }

    *width
}
