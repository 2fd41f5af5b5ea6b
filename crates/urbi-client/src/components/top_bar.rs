//! Page header with navigation and session controls.

use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::actions;
use crate::state::use_store;

#[derive(Properties, PartialEq)]
pub struct TopBarProps {
    pub title: AttrValue,
    /// Shows a back arrow to this route.
    #[prop_or_default]
    pub back: Option<Route>,
}

#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    let store = use_store();
    let navigator = use_navigator();

    let on_logout = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            actions::logout(&store);
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::Login);
            }
        })
    };

    let phone = store
        .auth
        .user
        .as_ref()
        .map(|user| user.phone_number.clone())
        .unwrap_or_default();

    html! {
        <header class="top-bar">
            if let Some(back) = props.back.clone() {
                <Link<Route> to={back} classes="top-bar-back">
                    <Icon data={IconData::LUCIDE_ARROW_LEFT} width="20px" height="20px" />
                </Link<Route>>
            }
            <h1 class="top-bar-title">{ props.title.clone() }</h1>
            <span class="top-bar-user">{ phone }</span>
            <button class="top-bar-logout" onclick={on_logout} title="Logout">
                <Icon data={IconData::LUCIDE_LOG_OUT} width="20px" height="20px" />
            </button>
        </header>
    }
}
