//! Sign-in form.

use urbi_core::model::LoginRequest;
use urbi_core::state::Severity;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::{actions, config};
use crate::state::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let store = use_store();
    let phone_number = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);

    if store.auth.is_authenticated {
        return html! { <Redirect<Route> to={Route::Videos} /> };
    }

    let on_phone_input = {
        let phone_number = phone_number.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone_number.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_submit = {
        let store = store.clone();
        let phone_number = phone_number.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if phone_number.is_empty() || password.is_empty() {
                actions::notify(
                    &store,
                    "Please enter phone number and password",
                    Severity::Warning,
                );
                return;
            }
            let credentials = LoginRequest {
                phone_number: (*phone_number).clone(),
                password: (*password).clone(),
            };
            let store = store.clone();
            // Success flips `is_authenticated`, which redirects on the next render
            wasm_bindgen_futures::spawn_local(async move {
                let _ = actions::login(store, credentials).await;
            });
        })
    };

    let is_loading = store.auth.is_loading;

    html! {
        <main class="page login-page">
            <div class="login-card">
                <h1>{ config().app_name }</h1>
                <form onsubmit={on_submit}>
                    <label class="field">
                        <span>{ "Phone Number" }</span>
                        <input
                            type="tel"
                            autocomplete="tel"
                            value={(*phone_number).clone()}
                            oninput={on_phone_input}
                            disabled={is_loading}
                        />
                    </label>
                    <label class="field">
                        <span>{ "Password" }</span>
                        <div class="password-field">
                            <input
                                type={if *show_password { "text" } else { "password" }}
                                autocomplete="current-password"
                                value={(*password).clone()}
                                oninput={on_password_input}
                                disabled={is_loading}
                            />
                            <button type="button" class="icon-btn" onclick={on_toggle_password}>
                                if *show_password {
                                    <Icon data={IconData::LUCIDE_EYE_OFF} width="18px" height="18px" />
                                } else {
                                    <Icon data={IconData::LUCIDE_EYE} width="18px" height="18px" />
                                }
                            </button>
                        </div>
                    </label>
                    <button type="submit" class="btn-primary btn-block" disabled={is_loading}>
                        { if is_loading { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>
            </div>
        </main>
    }
}
