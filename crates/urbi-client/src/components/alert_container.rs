//! Stack of transient alerts in the top-right corner.

use std::collections::HashMap;

use gloo::timers::callback::Timeout;
use urbi_core::state::AlertAction;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::services::config;
use crate::state::use_store;

/// Renders every visible alert and dismisses each one after
/// `AppConfig::alert_timeout_ms`.
///
/// One timer per alert; dismissing an alert by hand drops its timer, and
/// unmounting the container drops them all.
#[function_component(AlertContainer)]
pub fn alert_container() -> Html {
    let store = use_store();
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    let ids: Vec<u64> = store.alerts.alerts.iter().map(|alert| alert.id).collect();

    {
        let store = store.clone();
        let timers = timers.clone();
        use_effect_with(ids, move |ids| {
            let mut timers = timers.borrow_mut();
            timers.retain(|id, _| ids.contains(id));
            for &id in ids {
                timers.entry(id).or_insert_with(|| {
                    let store = store.clone();
                    Timeout::new(config().alert_timeout_ms, move || {
                        store.dispatch(AlertAction::Hide(id).into());
                    })
                });
            }
        });
    }

    {
        let timers = timers.clone();
        use_effect_with((), move |_| move || timers.borrow_mut().clear());
    }

    html! {
        <div class="alert-container">
            { for store.alerts.alerts.iter().map(|alert| {
                let id = alert.id;
                let on_close = {
                    let store = store.clone();
                    let timers = timers.clone();
                    Callback::from(move |_: MouseEvent| {
                        timers.borrow_mut().remove(&id);
                        store.dispatch(AlertAction::Hide(id).into());
                    })
                };
                html! {
                    <div key={id} class={classes!("alert", alert.severity.as_str())} role="alert">
                        <span class="alert-message">{ &alert.message }</span>
                        <button class="alert-close" onclick={on_close} title="Dismiss">
                            <Icon data={IconData::LUCIDE_X} width="16px" height="16px" />
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
