//! Route guard for pages that need a signed-in user.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::state::use_store;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Html,
}

/// Renders `children` for a signed-in user, otherwise redirects to login.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let store = use_store();

    if store.auth.is_authenticated {
        props.children.clone()
    } else if store.auth.is_loading {
        html! { <div class="page-loading">{ "Loading..." }</div> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
