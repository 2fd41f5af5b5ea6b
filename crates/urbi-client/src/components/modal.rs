//! Dialog overlay.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Visibility; the modal hides itself by setting this to `false`.
    pub state: UseStateHandle<bool>,
    pub children: Children,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Buttons rendered under the content.
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub onclose: Option<Callback<()>>,
    #[prop_or(true)]
    pub overlay_click_closes: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !*props.state {
        return html! {};
    }

    let close = {
        let state = props.state.clone();
        let onclose = props.onclose.clone();
        Callback::from(move |()| {
            state.set(false);
            if let Some(cb) = onclose.as_ref() {
                cb.emit(());
            }
        })
    };

    let on_overlay_click = {
        let close = close.clone();
        let overlay_click_closes = props.overlay_click_closes;
        Callback::from(move |_: MouseEvent| {
            if overlay_click_closes {
                close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class={classes!("modal", props.class.clone())} onclick={on_modal_click}>
                <div class="modal-header">
                    if let Some(title) = &props.title {
                        <h2>{ title.clone() }</h2>
                    }
                    <button class="modal-close-btn" onclick={on_close_click} title="Close">
                        <Icon data={IconData::LUCIDE_X} width="18px" height="18px" />
                    </button>
                </div>
                <div class="modal-content">
                    { for props.children.iter() }
                </div>
                if let Some(actions) = &props.actions {
                    <div class="modal-actions">{ actions.clone() }</div>
                }
            </div>
        </div>
    }
}
