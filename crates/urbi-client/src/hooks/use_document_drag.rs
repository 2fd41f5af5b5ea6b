//! Document-wide pointer tracking for drag gestures.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

type DragCallbacks = Rc<RefCell<(Callback<MouseEvent>, Callback<()>)>>;

/// Subscribes to `mousemove`/`mouseup` on the document while `active`.
///
/// The listeners are installed when `active` turns true and dropped when it
/// turns false or the component unmounts, so a drag keeps following the
/// pointer after it leaves the element that started it. The callbacks are
/// read at event time, never captured stale.
#[hook]
pub fn use_document_drag(active: bool, on_move: Callback<MouseEvent>, on_up: Callback<()>) {
    let callbacks: DragCallbacks = use_mut_ref(|| (on_move.clone(), on_up.clone()));
    *callbacks.borrow_mut() = (on_move, on_up);

    use_effect_with(active, move |&active| {
        let listeners = active.then(|| {
            let document = gloo::utils::document();

            let move_callbacks = callbacks.clone();
            let mousemove = EventListener::new(&document, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let on_move = move_callbacks.borrow().0.clone();
                on_move.emit(event.clone());
            });

            let mouseup = EventListener::new(&document, "mouseup", move |_| {
                let on_up = callbacks.borrow().1.clone();
                on_up.emit(());
            });

            (mousemove, mouseup)
        });

        move || drop(listeners)
    });
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use wasm_bindgen_test::*;
    use web_sys::Element;
    use yew::AppHandle;

    use super::*;
    use crate::test_util::{dispatch_on, dispatch_on_document, mount_root, settle};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct HandleProps {
        on_move: Callback<()>,
    }

    /// Button that starts a drag on press; the drag ends on document mouseup.
    #[function_component(DragHandle)]
    fn drag_handle(props: &HandleProps) -> Html {
        let active = use_state_eq(|| false);
        let on_move = {
            let on_move = props.on_move.clone();
            Callback::from(move |_: MouseEvent| on_move.emit(()))
        };
        let on_up = {
            let active = active.clone();
            Callback::from(move |()| active.set(false))
        };
        use_document_drag(*active, on_move, on_up);

        let onmousedown = Callback::from(move |_: MouseEvent| active.set(true));
        html! { <button class="drag-handle" {onmousedown} /> }
    }

    fn mount() -> (Element, AppHandle<DragHandle>, Rc<Cell<u32>>) {
        let moves = Rc::new(Cell::new(0));
        let counter = moves.clone();
        let root = mount_root("");
        let handle = yew::Renderer::<DragHandle>::with_root_and_props(
            root.clone(),
            HandleProps {
                on_move: Callback::from(move |()| counter.set(counter.get() + 1)),
            },
        )
        .render();
        (root, handle, moves)
    }

    fn button(root: &Element) -> Element {
        root.query_selector(".drag-handle").unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_listens_only_between_press_and_release() {
        let (root, handle, moves) = mount();
        settle().await;

        dispatch_on_document("mousemove", 5, 5);
        assert_eq!(moves.get(), 0);

        for round in 1..=2 {
            dispatch_on(&button(&root), "mousedown", 0, 0);
            settle().await;
            dispatch_on_document("mousemove", 10, 10);
            assert_eq!(moves.get(), round);

            dispatch_on_document("mouseup", 10, 10);
            settle().await;
            dispatch_on_document("mousemove", 20, 20);
            assert_eq!(moves.get(), round);
        }

        handle.destroy();
    }

    #[wasm_bindgen_test]
    async fn test_unmount_mid_drag_releases_listeners() {
        let (root, handle, moves) = mount();
        settle().await;

        dispatch_on(&button(&root), "mousedown", 0, 0);
        settle().await;
        dispatch_on_document("mousemove", 10, 10);
        assert_eq!(moves.get(), 1);

        handle.destroy();
        settle().await;
        dispatch_on_document("mousemove", 20, 20);
        dispatch_on_document("mouseup", 20, 20);
        assert_eq!(moves.get(), 1);
    }
}
