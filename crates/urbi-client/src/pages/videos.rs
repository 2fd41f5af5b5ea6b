//! Video list with the links tab.

use urbi_core::format::format_date;
use urbi_core::model::PublishStatus;
use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use super::links_tab::LinksTab;
use crate::components::{RequireAuth, StatusBadge, TopBar};
use crate::routes::Route;
use crate::services::actions;
use crate::state::use_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Videos,
    Links,
}

#[function_component(VideosPage)]
pub fn videos_page() -> Html {
    let tab = use_state_eq(|| Tab::Videos);

    let select = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    html! {
        <RequireAuth>
            <main class="page videos-page">
                <TopBar title="Videos" />
                <nav class="tabs">
                    <button
                        class={classes!("tab", (*tab == Tab::Videos).then_some("active"))}
                        onclick={select(Tab::Videos)}
                    >
                        { "Videos" }
                    </button>
                    <button
                        class={classes!("tab", (*tab == Tab::Links).then_some("active"))}
                        onclick={select(Tab::Links)}
                    >
                        { "Links" }
                    </button>
                </nav>
                {
                    match *tab {
                        Tab::Videos => html! { <VideosTab /> },
                        Tab::Links => html! { <LinksTab /> },
                    }
                }
            </main>
        </RequireAuth>
    }
}

#[function_component(VideosTab)]
fn videos_tab() -> Html {
    let store = use_store();
    let navigator = use_navigator();
    let filter = use_state_eq(|| None::<PublishStatus>);
    let filter_open = use_state_eq(|| false);

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(actions::fetch_videos(store));
        });
    }

    let on_toggle_filter = {
        let filter_open = filter_open.clone();
        Callback::from(move |_: MouseEvent| filter_open.set(!*filter_open))
    };

    let choose = |status: Option<PublishStatus>| {
        let filter = filter.clone();
        let filter_open = filter_open.clone();
        Callback::from(move |_: MouseEvent| {
            filter.set(status);
            filter_open.set(false);
        })
    };

    let on_new = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::NewVideo);
            }
        })
    };

    let videos = store.videos.filtered(*filter);
    let is_loading = store.videos.is_loading;

    html! {
        <section class="videos-tab">
            <div class="toolbar">
                <button class="icon-btn" onclick={on_toggle_filter} title="Filter">
                    <Icon data={IconData::LUCIDE_LIST} width="20px" height="20px" />
                </button>
                if *filter_open {
                    <ul class="filter-menu">
                        <li onclick={choose(None)}>{ "All Videos" }</li>
                        { for PublishStatus::ALL.into_iter().map(|status| html! {
                            <li onclick={choose(Some(status))}>{ status.label() }</li>
                        }) }
                    </ul>
                }
                if let Some(status) = *filter {
                    <span class="chip">
                        { format!("Filter: {}", status.label()) }
                        <button class="chip-remove" onclick={choose(None)} title="Clear filter">
                            <Icon data={IconData::LUCIDE_X} width="14px" height="14px" />
                        </button>
                    </span>
                }
            </div>

            if is_loading {
                <div class="spinner" />
            } else if videos.is_empty() {
                <p class="empty">{ "No videos found" }</p>
            }

            <div class="video-grid">
                { for videos.into_iter().map(|video| html! {
                    <Link<Route> to={Route::VideoDetail { id: video.id.clone() }} classes="video-card">
                        <h3 class="video-card-title">{ &video.file_name }</h3>
                        <p class="video-card-date">{ format_date(&video.created_at) }</p>
                        <StatusBadge status={video.publish_status} />
                    </Link<Route>>
                }) }
            </div>

            <button class="fab" onclick={on_new} title="Upload video">
                <Icon data={IconData::LUCIDE_PLUS} width="24px" height="24px" />
            </button>
        </section>
    }
}
