//! Main application component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::AlertContainer;
use crate::pages::{
    LoginPage, NotFoundPage, PanicPage, VideoDetailPage, VideoUploadPage, VideosPage,
};
use crate::routes::Route;
use crate::state::StoreProvider;

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Root => html! { <Redirect<Route> to={Route::Videos} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Videos => html! { <VideosPage /> },
        Route::NewVideo => html! { <VideoUploadPage /> },
        Route::VideoDetail { id } => html! { <VideoDetailPage id={id} /> },
        Route::Panic => html! { <PanicPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Root application component with router and store.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <StoreProvider>
                <AlertContainer />
                <Switch<Route> render={switch} />
            </StoreProvider>
        </BrowserRouter>
    }
}
