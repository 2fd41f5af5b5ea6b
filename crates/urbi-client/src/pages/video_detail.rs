//! Playback, metadata and editing of a single video.

use urbi_core::format::format_date_time;
use urbi_core::model::{PublishStatus, UpdateVideoRequest, Video};
use urbi_core::placement::{DEFAULT_VALUE, MAX_SIZE, MIN_SIZE, SIZE_STEP};
use urbi_core::state::Severity;
use urbi_core::Placement;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use crate::components::{Modal, QrPositionHelper, RequireAuth, StatusBadge, TopBar};
use crate::routes::Route;
use crate::services::{actions, config};
use crate::state::use_store;
use crate::util::copy_to_clipboard;

#[derive(Properties, PartialEq)]
pub struct VideoDetailPageProps {
    pub id: AttrValue,
}

#[function_component(VideoDetailPage)]
pub fn video_detail_page(props: &VideoDetailPageProps) -> Html {
    html! {
        <RequireAuth>
            <VideoDetail id={props.id.clone()} />
        </RequireAuth>
    }
}

/// Editable fields, seeded from the stored video.
#[derive(Debug, Clone, PartialEq)]
struct EditForm {
    status: PublishStatus,
    link_to_action: String,
    show_link_at: u32,
    placement: Placement,
}

impl EditForm {
    fn from_video(video: &Video) -> Self {
        Self {
            status: video.publish_status,
            link_to_action: video.link_to_action.clone(),
            show_link_at: video.show_link_at_seconds(),
            placement: video.placement(),
        }
    }

    fn request(&self) -> UpdateVideoRequest {
        UpdateVideoRequest::new(
            self.status,
            self.link_to_action.clone(),
            self.show_link_at,
            self.placement,
        )
    }
}

/// Parses a numeric placement field; empty input means the default.
fn parse_fraction(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return Some(DEFAULT_VALUE);
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Properties, PartialEq)]
struct VideoDetailProps {
    id: AttrValue,
}

#[function_component(VideoDetail)]
fn video_detail(props: &VideoDetailProps) -> Html {
    let store = use_store();
    let navigator = use_navigator();
    let video = store.videos.find(&props.id).cloned();

    let form = use_state(|| video.as_ref().map(EditForm::from_video));
    let is_updating = use_state_eq(|| false);
    let delete_open = use_state(|| false);

    {
        let store = store.clone();
        let missing = video.is_none();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(actions::fetch_links(store.clone()));
            // Opened directly by URL: the list has not been loaded yet
            if missing {
                wasm_bindgen_futures::spawn_local(actions::fetch_videos(store));
            }
        });
    }

    {
        let form = form.clone();
        use_effect_with(video.clone(), move |video| {
            form.set(video.as_ref().map(EditForm::from_video));
        });
    }

    let current = (*form)
        .clone()
        .or_else(|| video.as_ref().map(EditForm::from_video));
    let (Some(video), Some(current)) = (video, current) else {
        return html! {
            <main class="page detail-page">
                <TopBar title="Video Details" back={Route::Videos} />
                if store.videos.is_loading {
                    <div class="spinner" />
                } else {
                    <p class="empty">{ "Video not found" }</p>
                }
            </main>
        };
    };

    let update_form = |apply: fn(&mut EditForm, String)| {
        let form = form.clone();
        move |value: String| {
            if let Some(mut next) = (*form).clone() {
                apply(&mut next, value);
                form.set(Some(next));
            }
        }
    };

    let on_status_change = {
        let update = update_form(|form, value| {
            if let Some(status) = PublishStatus::parse(&value) {
                form.status = status;
            }
        });
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update(select.value());
        })
    };

    let on_link_change = {
        let update = update_form(|form, value| form.link_to_action = value);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update(select.value());
        })
    };

    let on_show_link_at = {
        let update = update_form(|form, value| {
            if value.trim().is_empty() {
                form.show_link_at = 0;
            } else if let Ok(seconds) = value.parse() {
                form.show_link_at = seconds;
            }
        });
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let numeric = |apply: fn(&mut EditForm, f64)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(value) = parse_fraction(&input.value()) else {
                return;
            };
            if let Some(mut next) = (*form).clone() {
                apply(&mut next, value);
                form.set(Some(next));
            }
        })
    };
    let on_x_input = numeric(|form, x| {
        form.placement = form.placement.with_position(x, form.placement.y());
    });
    let on_y_input = numeric(|form, y| {
        form.placement = form.placement.with_position(form.placement.x(), y);
    });
    let on_size_input = numeric(|form, size| form.placement = form.placement.with_size(size));

    let on_position_change = {
        let form = form.clone();
        Callback::from(move |(x, y): (f64, f64)| {
            if let Some(mut next) = (*form).clone() {
                next.placement = next.placement.with_position(x, y);
                form.set(Some(next));
            }
        })
    };

    let on_size_change = {
        let form = form.clone();
        Callback::from(move |size: f64| {
            if let Some(mut next) = (*form).clone() {
                next.placement = next.placement.with_size(size);
                form.set(Some(next));
            }
        })
    };

    let on_copy_url = {
        let store = store.clone();
        let url = video.video_url.clone();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            let url = url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if copy_to_clipboard(&url).await {
                    actions::notify(&store, "URL copied to clipboard", Severity::Success);
                }
            });
        })
    };

    let on_update = {
        let store = store.clone();
        let is_updating = is_updating.clone();
        let id = video.id.clone();
        let request = current.request();
        Callback::from(move |_: MouseEvent| {
            is_updating.set(true);
            let store = store.clone();
            let is_updating = is_updating.clone();
            let id = id.clone();
            let request = request.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if actions::update_video(store.clone(), id, request).await.is_ok() {
                    actions::notify(&store, "Video updated successfully", Severity::Success);
                }
                is_updating.set(false);
            });
        })
    };

    let on_open_delete = {
        let delete_open = delete_open.clone();
        Callback::from(move |_: MouseEvent| delete_open.set(true))
    };

    let on_cancel_delete = {
        let delete_open = delete_open.clone();
        Callback::from(move |_: MouseEvent| delete_open.set(false))
    };

    let on_confirm_delete = {
        let store = store.clone();
        let delete_open = delete_open.clone();
        let id = video.id.clone();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            let delete_open = delete_open.clone();
            let navigator = navigator.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let deleted = actions::delete_video(store.clone(), id).await.is_ok();
                delete_open.set(false);
                if deleted {
                    actions::notify(&store, "Video deleted successfully", Severity::Success);
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Videos);
                    }
                }
            });
        })
    };

    let links = &store.links.links;
    let updating = *is_updating;
    let marker_target_url = links
        .iter()
        .find(|link| link.id == current.link_to_action)
        .map_or(AttrValue::Static("https://example.com"), |link| {
            AttrValue::from(config().endpoints().link_redirect(&link.id))
        });
    let placement = current.placement;

    html! {
        <main class="page detail-page">
            <TopBar title="Video Details" back={Route::Videos} />

            <section class="card">
                <div class="card-header">
                    <h2>{ "Video Player" }</h2>
                    <button class="icon-btn danger" onclick={on_open_delete} title="Delete video">
                        <Icon data={IconData::LUCIDE_TRASH_2} width="20px" height="20px" />
                    </button>
                </div>
                <video class="player" controls={true} src={video.video_url.clone()}>
                    { "Your browser does not support the video tag." }
                </video>
            </section>

            <section class="card info-card">
                <h2>{ "Information" }</h2>
                <dl>
                    <dt>{ "File Name" }</dt>
                    <dd>{ &video.file_name }</dd>
                    <dt>{ "Status" }</dt>
                    <dd><StatusBadge status={video.publish_status} /></dd>
                    <dt>{ "Created At" }</dt>
                    <dd>{ format_date_time(&video.created_at) }</dd>
                    <dt>{ "Updated At" }</dt>
                    <dd>{ format_date_time(&video.updated_at) }</dd>
                    <dt>{ "Video URL" }</dt>
                    <dd class="video-url">
                        <span>{ &video.video_url }</span>
                        <button class="icon-btn" onclick={on_copy_url} title="Copy URL">
                            <Icon data={IconData::LUCIDE_COPY} width="16px" height="16px" />
                        </button>
                    </dd>
                </dl>
            </section>

            <section class="card form-card">
                <h2>{ "Edit Video" }</h2>

                <label class="field">
                    <span>{ "Publish Status" }</span>
                    <select onchange={on_status_change} disabled={updating}>
                        { for PublishStatus::ALL.into_iter().map(|option| html! {
                            <option value={option.as_str()} selected={current.status == option}>
                                { option.label() }
                            </option>
                        }) }
                    </select>
                </label>

                if store.links.is_loading {
                    <p class="hint">{ "Loading links..." }</p>
                } else {
                    <label class="field">
                        <span>{ "Link to Action" }</span>
                        <select onchange={on_link_change} disabled={updating}>
                            <option value="" selected={current.link_to_action.is_empty()}>{ "None" }</option>
                            { for links.iter().map(|link| html! {
                                <option
                                    key={link.id.clone()}
                                    value={link.id.clone()}
                                    selected={current.link_to_action == link.id}
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
                    <span>{ "Show Link At (seconds)" }</span>
                    <input
                        type="number"
                        min="0"
                        value={current.show_link_at.to_string()}
                        oninput={on_show_link_at}
                        disabled={updating}
                    />
                    <small>{ "Timestamp in seconds when the QR code link should be displayed" }</small>
                </label>

                <div class="field-row">
                    <label class="field">
                        <span>{ "QR Code X Position" }</span>
                        <input
                            type="number" min="0" max="1" step={SIZE_STEP.to_string()}
                            value={placement.x().to_string()}
                            oninput={on_x_input}
                            disabled={updating}
                        />
                        <small>{ "0.0 = left, 1.0 = right" }</small>
                    </label>
                    <label class="field">
                        <span>{ "QR Code Y Position" }</span>
                        <input
                            type="number" min="0" max="1" step={SIZE_STEP.to_string()}
                            value={placement.y().to_string()}
                            oninput={on_y_input}
                            disabled={updating}
                        />
                        <small>{ "0.0 = top, 1.0 = bottom" }</small>
                    </label>
                    <label class="field">
                        <span>{ "QR Code Size" }</span>
                        <input
                            type="number"
                            min={MIN_SIZE.to_string()}
                            max={MAX_SIZE.to_string()}
                            step={SIZE_STEP.to_string()}
                            value={placement.size().to_string()}
                            oninput={on_size_input}
                            disabled={updating}
                        />
                        <small>{ "Relative to screen width" }</small>
                    </label>
                </div>

                <QrPositionHelper
                    x={placement.x()}
                    y={placement.y()}
                    size={placement.size()}
                    {on_position_change}
                    {on_size_change}
                    {marker_target_url}
                    media_url={AttrValue::from(video.video_url.clone())}
                    target_timestamp={f64::from(current.show_link_at)}
                />

                <button class="btn-primary btn-block" onclick={on_update} disabled={updating}>
                    { if updating { "Updating..." } else { "Update Video" } }
                </button>
            </section>

            <Modal
                state={delete_open.clone()}
                title="Delete Video"
                actions={html! {
                    <>
                        <button class="btn-secondary" onclick={on_cancel_delete}>{ "Cancel" }</button>
                        <button class="btn-danger" onclick={on_confirm_delete}>{ "Delete" }</button>
                    </>
                }}
            >
                <p>{ "Are you sure you want to delete this video? This action cannot be undone." }</p>
            </Modal>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_parse_fraction() {
        assert_eq!(parse_fraction(""), Some(DEFAULT_VALUE));
        assert_eq!(parse_fraction("0.42"), Some(0.42));
        assert_eq!(parse_fraction("abc"), None);
        assert_eq!(parse_fraction("NaN"), None);
    }
}
