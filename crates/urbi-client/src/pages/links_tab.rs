//! Short-link management: list, QR codes, hit statistics.

use std::collections::HashMap;

use urbi_core::format::hits_label;
use urbi_core::model::{Link, LinkHit};
use urbi_core::state::Severity;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::components::{Modal, QrGlyph, qr_svg};
use crate::services::{actions, config};
use crate::state::use_store;
use crate::util::{Generation, copy_to_clipboard, download_text};

const QR_DOWNLOAD_SIZE: u32 = 256;

fn redirect_url(link: &Link) -> String {
    config().endpoints().link_redirect(&link.id)
}

#[function_component(LinksTab)]
pub fn links_tab() -> Html {
    let store = use_store();

    let create_open = use_state(|| false);
    let target_link = use_state(String::new);
    let is_creating = use_state_eq(|| false);

    let qr_open = use_state(|| false);
    let hits_open = use_state(|| false);
    let selected = use_state(|| None::<Link>);
    let hits = use_state(Vec::<LinkHit>::new);
    let loading_hits = use_state_eq(|| false);
    let hit_counts = use_state(HashMap::<String, usize>::new);
    let counts_generation = use_memo((), |_| Generation::default());
    let hits_generation = use_memo((), |_| Generation::default());

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(actions::fetch_links(store));
        });
    }

    // Hit counts for the chips, refreshed whenever the set of links changes.
    // A newer set of links makes any running loop stale.
    {
        let store = store.clone();
        let hit_counts = hit_counts.clone();
        let generation = (*counts_generation).clone();
        let ids: Vec<String> = store.links.links.iter().map(|link| link.id.clone()).collect();
        use_effect_with(ids, move |ids| {
            let ids = ids.clone();
            let current = generation.next();
            if !ids.is_empty() {
                wasm_bindgen_futures::spawn_local(async move {
                    let mut counts = HashMap::with_capacity(ids.len());
                    for id in ids {
                        if !generation.is_current(current) {
                            return;
                        }
                        match actions::link_hits(store.clone(), id.clone()).await {
                            Ok(hits) => {
                                counts.insert(id, hits.len());
                            }
                            Err(e) if e.is_unauthorized() => return,
                            Err(_) => {
                                counts.insert(id, 0);
                            }
                        }
                    }
                    if generation.is_current(current) {
                        hit_counts.set(counts);
                    }
                });
            }
        });
    }

    let on_target_input = {
        let target_link = target_link.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            target_link.set(input.value());
        })
    };

    let on_open_create = {
        let create_open = create_open.clone();
        Callback::from(move |_: MouseEvent| create_open.set(true))
    };

    let on_cancel_create = {
        let create_open = create_open.clone();
        let is_creating = is_creating.clone();
        Callback::from(move |_: MouseEvent| {
            if !*is_creating {
                create_open.set(false);
            }
        })
    };

    let on_create = {
        let store = store.clone();
        let create_open = create_open.clone();
        let target_link = target_link.clone();
        let is_creating = is_creating.clone();
        Callback::from(move |_: MouseEvent| {
            let target = target_link.trim().to_string();
            if target.is_empty() {
                actions::notify(&store, "Please enter a target link", Severity::Warning);
                return;
            }
            is_creating.set(true);
            let store = store.clone();
            let create_open = create_open.clone();
            let target_link = target_link.clone();
            let is_creating = is_creating.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if actions::create_link(store.clone(), target).await.is_ok() {
                    actions::notify(&store, "Link created successfully", Severity::Success);
                    create_open.set(false);
                    target_link.set(String::new());
                }
                is_creating.set(false);
            });
        })
    };

    let open_qr = {
        let selected = selected.clone();
        let qr_open = qr_open.clone();
        move |link: Link| {
            let selected = selected.clone();
            let qr_open = qr_open.clone();
            Callback::from(move |_: MouseEvent| {
                selected.set(Some(link.clone()));
                qr_open.set(true);
            })
        }
    };

    let open_hits = {
        let store = store.clone();
        let selected = selected.clone();
        let hits_open = hits_open.clone();
        let hits = hits.clone();
        let loading_hits = loading_hits.clone();
        let generation = (*hits_generation).clone();
        move |link: Link| {
            let store = store.clone();
            let selected = selected.clone();
            let hits_open = hits_open.clone();
            let hits = hits.clone();
            let loading_hits = loading_hits.clone();
            let generation = generation.clone();
            Callback::from(move |_: MouseEvent| {
                selected.set(Some(link.clone()));
                hits_open.set(true);
                loading_hits.set(true);
                hits.set(Vec::new());
                let store = store.clone();
                let hits = hits.clone();
                let loading_hits = loading_hits.clone();
                let generation = generation.clone();
                let current = generation.next();
                let id = link.id.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = actions::link_hits(store.clone(), id).await;
                    if !generation.is_current(current) {
                        return;
                    }
                    match result {
                        Ok(loaded) => hits.set(loaded),
                        Err(e) => {
                            tracing::error!("{e}");
                            actions::notify(&store, "Failed to load link hits", Severity::Error);
                            hits.set(Vec::new());
                        }
                    }
                    loading_hits.set(false);
                });
            })
        }
    };

    let copy_link = {
        let store = store.clone();
        move |link: &Link| {
            let store = store.clone();
            let url = redirect_url(link);
            Callback::from(move |_: MouseEvent| {
                let store = store.clone();
                let url = url.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if copy_to_clipboard(&url).await {
                        actions::notify(&store, "Link copied to clipboard", Severity::Success);
                    }
                });
            })
        }
    };

    let on_download_qr = {
        let store = store.clone();
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(link) = &*selected else {
                return;
            };
            match qr_svg(&redirect_url(link), QR_DOWNLOAD_SIZE) {
                Ok(svg) => {
                    download_text(&format!("qrcode-{}.svg", link.id), "image/svg+xml", &svg);
                    actions::notify(&store, "QR Code downloaded successfully", Severity::Success);
                }
                Err(e) => actions::notify(&store, e.to_string(), Severity::Error),
            }
        })
    };

    let close = |state: &UseStateHandle<bool>| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(false))
    };

    let links = &store.links.links;

    if store.links.is_loading && links.is_empty() {
        return html! { <section class="links-tab"><div class="spinner" /></section> };
    }

    html! {
        <section class="links-tab">
            if links.is_empty() {
                <div class="empty">
                    <h3>{ "No links yet" }</h3>
                    <p>{ "Create your first link to get started" }</p>
                </div>
            } else {
                <div class="link-list">
                    { for links.iter().map(|link| {
                        let url = redirect_url(link);
                        html! {
                            <div key={link.id.clone()} class="link-card">
                                <div class="link-card-qr" onclick={open_qr(link.clone())}>
                                    <QrGlyph value={url.clone()} size={80} />
                                </div>
                                <div class="link-card-info">
                                    <div class="link-card-header">
                                        <span class="link-card-id">{ format!("ID: {}...", link.short_id()) }</span>
                                        <button class="chip" onclick={open_hits(link.clone())}>
                                            { hits_label(hit_counts.get(&link.id).copied()) }
                                        </button>
                                    </div>
                                    <p class="link-card-target">{ format!("Target: {}", link.target_link) }</p>
                                    <p class="link-card-url">{ url }</p>
                                </div>
                                <div class="link-card-actions">
                                    <button class="icon-btn" onclick={open_qr(link.clone())} title="View QR Code">
                                        <Icon data={IconData::LUCIDE_MAXIMIZE} width="18px" height="18px" />
                                    </button>
                                    <button class="icon-btn" onclick={copy_link(link)} title="Copy link URL">
                                        <Icon data={IconData::LUCIDE_COPY} width="18px" height="18px" />
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }

            <button class="fab" onclick={on_open_create} title="Create link">
                <Icon data={IconData::LUCIDE_PLUS} width="24px" height="24px" />
            </button>

            <Modal
                state={create_open.clone()}
                title="Create New Link"
                overlay_click_closes={!*is_creating}
                actions={html! {
                    <>
                        <button class="btn-secondary" onclick={on_cancel_create} disabled={*is_creating}>
                            { "Cancel" }
                        </button>
                        <button class="btn-primary" onclick={on_create} disabled={*is_creating}>
                            { if *is_creating { "Creating..." } else { "Create" } }
                        </button>
                    </>
                }}
            >
                <label class="field">
                    <span>{ "Target Link URL" }</span>
                    <input
                        type="url"
                        placeholder="https://example.com"
                        value={(*target_link).clone()}
                        oninput={on_target_input}
                        disabled={*is_creating}
                    />
                </label>
            </Modal>

            <Modal
                state={qr_open.clone()}
                title="QR Code"
                actions={html! {
                    <>
                        <button class="btn-secondary" onclick={close(&qr_open)}>{ "Close" }</button>
                        <button class="btn-primary" onclick={on_download_qr}>
                            <Icon data={IconData::LUCIDE_DOWNLOAD} width="18px" height="18px" />
                            { "Download QR Code" }
                        </button>
                    </>
                }}
            >
                if let Some(link) = &*selected {
                    <div class="qr-dialog">
                        <QrGlyph value={redirect_url(link)} size={QR_DOWNLOAD_SIZE} />
                        <p>{ redirect_url(link) }</p>
                        <p>{ format!("Target: {}", link.target_link) }</p>
                    </div>
                }
            </Modal>

            <Modal
                state={hits_open.clone()}
                title={format!("Link Hits ({} total)", hits.len())}
                actions={html! {
                    <button class="btn-secondary" onclick={close(&hits_open)}>{ "Close" }</button>
                }}
            >
                if *loading_hits {
                    <div class="spinner" />
                } else if hits.is_empty() {
                    <p class="empty">{ "No hits recorded yet" }</p>
                } else {
                    <ul class="hit-list">
                        { for hits.iter().map(|hit| html! {
                            <li key={hit.id.clone()} class="hit">
                                <span>{ format!("IP: {}", hit.ip_address) }</span>
                                if let Some(address) = &hit.address {
                                    <span>{ address.display() }</span>
                                }
                                if let Some(geo) = hit.coordinates() {
                                    <span class="hit-coordinates">
                                        { format!("Lat: {:.4}, Lng: {:.4}", geo.latitude, geo.longitude) }
                                    </span>
                                }
                            </li>
                        }) }
                    </ul>
                }
            </Modal>
        </section>
    }
}
