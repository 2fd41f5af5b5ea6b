//! Page shown after a WASM panic.

use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::util::copy_to_clipboard;

const PANIC_INFO_KEY: &str = "urbi_panic_info";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn get_panic_info() -> Option<String> {
    local_storage()?.get_item(PANIC_INFO_KEY).ok()?
}

fn clear_panic_info() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(PANIC_INFO_KEY);
    }
}

/// Installs a panic hook that logs through `console_error_panic_hook`,
/// saves the message to localStorage and redirects to the panic page.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);

        let location = info.location().map_or_else(
            || "unknown location".to_string(),
            |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
        );
        let panic_info = format!("{info}\n\nLocation: {location}");
        web_sys::console::error_1(&JsValue::from_str(&panic_info));

        if let Some(storage) = local_storage() {
            let _ = storage.set_item(PANIC_INFO_KEY, &panic_info);
        }
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_pathname("/panic");
        }
    }));
}

#[function_component(PanicPage)]
pub fn panic_page() -> Html {
    let panic_info = use_state(get_panic_info);

    let on_clear = {
        let panic_info = panic_info.clone();
        Callback::from(move |_: MouseEvent| {
            clear_panic_info();
            panic_info.set(None);
        })
    };

    let on_copy = {
        let info = (*panic_info).clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(text) = info.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    copy_to_clipboard(&text).await;
                });
            }
        })
    };

    html! {
        <main class="page panic-page">
            <div class="panic-container">
                <h1>{ "Something went wrong" }</h1>
                <p class="panic-description">
                    { "The application hit an unexpected error." }
                </p>

                if let Some(info) = &*panic_info {
                    <div class="panic-info-box">
                        <h2>{ "Error details" }</h2>
                        <pre class="panic-details">{ info }</pre>
                        <div class="panic-actions">
                            <button onclick={on_copy} class="btn-secondary">{ "Copy" }</button>
                            <button onclick={on_clear} class="btn-secondary">{ "Clear" }</button>
                        </div>
                    </div>
                } else {
                    <p class="panic-cleared">{ "No error details were recorded." }</p>
                }

                <Link<Route> to={Route::Videos} classes="btn-primary">
                    { "Back to videos" }
                </Link<Route>>
            </div>
        </main>
    }
}
