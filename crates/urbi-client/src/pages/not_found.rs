use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found-page">
            <h1>{ "404" }</h1>
            <p>{ "Page not found" }</p>
            <Link<Route> to={Route::Videos}>{ "Go to videos" }</Link<Route>>
        </main>
    }
}
