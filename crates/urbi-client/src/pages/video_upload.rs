//! Upload form for a new video.

use std::rc::Rc;

use urbi_core::format::format_file_size;
use urbi_core::model::{NewVideo, PublishStatus};
use urbi_core::state::Severity;
use urbi_core::Placement;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use crate::components::{QrPositionHelper, RequireAuth, TopBar};
use crate::routes::Route;
use crate::services::{actions, config};
use crate::state::use_store;
use crate::util::{ObjectUrl, selected_file};

/// File chosen for upload with its local preview URL.
#[derive(Clone, PartialEq)]
struct SelectedFile {
    file: web_sys::File,
    preview: Option<Rc<ObjectUrl>>,
}

#[function_component(VideoUploadPage)]
pub fn video_upload_page() -> Html {
    html! {
        <RequireAuth>
            <UploadForm />
        </RequireAuth>
    }
}

#[function_component(UploadForm)]
fn upload_form() -> Html {
    let store = use_store();
    let navigator = use_navigator();
    let file_input = use_node_ref();

    let selected = use_state(|| None::<SelectedFile>);
    let link_id = use_state(String::new);
    let status = use_state_eq(PublishStatus::default);
    let show_link_at = use_state_eq(|| 0_u32);
    let placement = use_state_eq(Placement::default);

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(actions::fetch_links(store));
        });
    }

    let is_uploading = store.videos.is_loading;
    let progress = store.videos.upload_progress;

    let on_file_change = {
        let store = store.clone();
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = selected_file(&input) else {
                return;
            };
            if !file.type_().starts_with("video/") {
                actions::notify(&store, "Please select a valid video file", Severity::Error);
                input.set_value("");
                return;
            }
            let preview = ObjectUrl::new(&file).map(Rc::new);
            selected.set(Some(SelectedFile { file, preview }));
        })
    };

    let on_browse = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_change_file = {
        let selected = selected.clone();
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(None);
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let on_link_change = {
        let link_id = link_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            link_id.set(select.value());
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(parsed) = PublishStatus::parse(&select.value()) {
                status.set(parsed);
            }
        })
    };

    let on_show_link_at = {
        let show_link_at = show_link_at.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            show_link_at.set(input.value().parse().unwrap_or(0));
        })
    };

    let on_position_change = {
        let placement = placement.clone();
        Callback::from(move |(x, y): (f64, f64)| placement.set(placement.with_position(x, y)))
    };

    let on_size_change = {
        let placement = placement.clone();
        Callback::from(move |size: f64| placement.set(placement.with_size(size)))
    };

    let on_upload = {
        let store = store.clone();
        let selected = selected.clone();
        let link_id = link_id.clone();
        let status = status.clone();
        let show_link_at = show_link_at.clone();
        let placement = placement.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(chosen) = (*selected).clone() else {
                actions::notify(&store, "Please select a video file", Severity::Warning);
                return;
            };
            let video = NewVideo {
                link_to_action: (*link_id).clone(),
                publish_status: *status,
                show_link_at: *show_link_at,
                placement: *placement,
            };
            let store = store.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if actions::create_video(store.clone(), chosen.file, video).await.is_ok() {
                    actions::notify(&store, "Video uploaded successfully", Severity::Success);
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Videos);
                    }
                }
            });
        })
    };

    let links = &store.links.links;
    let marker_target_url = links
        .iter()
        .find(|link| link.id == *link_id)
        .map_or(AttrValue::Static("https://example.com"), |link| {
            AttrValue::from(config().endpoints().link_redirect(&link.id))
        });
    let media_url = (*selected)
        .as_ref()
        .and_then(|chosen| chosen.preview.as_ref())
        .map(|preview| AttrValue::from(preview.as_str().to_string()));

    html! {
        <main class="page upload-page">
            <TopBar title="Upload Video" back={(!is_uploading).then_some(Route::Videos)} />
            <div class="card form-card">
                <input
                    ref={file_input}
                    type="file"
                    accept="video/*"
                    class="hidden"
                    onchange={on_file_change}
                    disabled={is_uploading}
                />
                if let Some(chosen) = &*selected {
                    <div class="file-summary">
                        <div>
                            <p class="file-name">{ chosen.file.name() }</p>
                            <p class="file-size">{ format_file_size(file_size(&chosen.file)) }</p>
                        </div>
                        if !is_uploading {
                            <button class="btn-secondary" onclick={on_change_file}>{ "Change" }</button>
                        }
                    </div>
                } else {
                    <div class="file-drop" onclick={on_browse}>
                        <Icon data={IconData::LUCIDE_UPLOAD} width="48px" height="48px" />
                        <h3>{ "Choose Video File" }</h3>
                        <p>{ "Click to browse" }</p>
                    </div>
                }

                if store.links.is_loading {
                    <p class="hint">{ "Loading links..." }</p>
                } else {
                    <label class="field">
                        <span>{ "Link to Action" }</span>
                        <select onchange={on_link_change} disabled={is_uploading}>
                            <option value="" selected={link_id.is_empty()}>{ "None" }</option>
                            { for links.iter().map(|link| html! {
                                <option
                                    key={link.id.clone()}
                                    value={link.id.clone()}
                                    selected={*link_id == link.id}
                                >
                                    { format!("{} (ID: {}...)", link.target_link, link.short_id()) }
                                </option>
                            }) }
                        </select>
                        if links.is_empty() {
                            <small>{ "No links available. Create a link first." }</small>
                        }
                    </label>
                }

                <label class="field">
                    <span>{ "Publish Status" }</span>
                    <select onchange={on_status_change} disabled={is_uploading}>
                        { for PublishStatus::ALL.into_iter().map(|option| html! {
                            <option value={option.as_str()} selected={*status == option}>
                                { option.label() }
                            </option>
                        }) }
                    </select>
                </label>

                <label class="field">
                    <span>{ "Show Link At (seconds)" }</span>
                    <input
                        type="number"
                        min="0"
                        value={show_link_at.to_string()}
                        oninput={on_show_link_at}
                        disabled={is_uploading}
                    />
                    <small>{ "Timestamp in seconds when the QR code link should be displayed" }</small>
                </label>

                <QrPositionHelper
                    x={placement.x()}
                    y={placement.y()}
                    size={placement.size()}
                    {on_position_change}
                    {on_size_change}
                    {marker_target_url}
                    {media_url}
                    target_timestamp={f64::from(*show_link_at)}
                />

                if is_uploading {
                    <div class="upload-progress">
                        <div class="upload-progress-label">
                            <span>{ "Uploading..." }</span>
                            <strong>{ format!("{progress}%") }</strong>
                        </div>
                        <div class="progress-track">
                            <div class="progress-bar" style={format!("width: {progress}%;")} />
                        </div>
                    </div>
                }

                <button
                    class="btn-primary btn-block"
                    onclick={on_upload}
                    disabled={is_uploading || selected.is_none()}
                >
                    <Icon data={IconData::LUCIDE_UPLOAD} width="18px" height="18px" />
                    { if is_uploading { "Uploading..." } else { "Upload Video" } }
                </button>
            </div>
        </main>
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_size(file: &web_sys::File) -> u64 {
    file.size().max(0.0) as u64
}
