//! Interactive preview for placing the QR marker over a video frame.
//!
//! The marker is dragged with the mouse inside a 16:9 frame; its size comes
//! from a slider. Positions are normalized to `[0, 1]` over the marker's
//! available travel, so `(0, 0)` is flush top-left and `(1, 1)` flush
//! bottom-right at any size.

use std::cell::RefCell;
use std::rc::Rc;

use urbi_core::format::percent_label;
use urbi_core::placement::{MAX_SIZE, MIN_SIZE, SIZE_STEP};
use urbi_core::{ContainerRect, DragController, MarkerLayout, Placement};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::QrGlyph;
use crate::hooks::{use_document_drag, use_element_width, use_media_seek};

const GUIDE_LINES: [u8; 3] = [25, 50, 75];
const SIZE_MARKS: [f64; 4] = [0.05, 0.15, 0.25, 0.4];

#[derive(Properties, PartialEq)]
pub struct QrPositionHelperProps {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub on_position_change: Callback<(f64, f64)>,
    pub on_size_change: Callback<f64>,
    #[prop_or(AttrValue::Static("https://example.com"))]
    pub marker_target_url: AttrValue,
    #[prop_or_default]
    pub media_url: Option<AttrValue>,
    /// Second of the video shown behind the marker.
    #[prop_or_default]
    pub target_timestamp: f64,
}

fn container_rect(node: &NodeRef) -> Option<ContainerRect> {
    let element = node.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(ContainerRect::new(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    ))
}

/// Props read by document listeners during a drag.
struct Latest {
    size: f64,
    on_position_change: Callback<(f64, f64)>,
}

#[function_component(QrPositionHelper)]
pub fn qr_position_helper(props: &QrPositionHelperProps) -> Html {
    let container_ref = use_node_ref();
    let video_ref = use_node_ref();
    let frame_width = use_element_width(container_ref.clone());
    let controller = use_mut_ref(DragController::new);
    let dragging = use_state_eq(|| false);

    let latest: Rc<RefCell<Latest>> = use_mut_ref(|| Latest {
        size: props.size,
        on_position_change: props.on_position_change.clone(),
    });
    {
        let mut latest = latest.borrow_mut();
        latest.size = props.size;
        latest.on_position_change = props.on_position_change.clone();
    }

    use_media_seek(
        video_ref.clone(),
        props.media_url.clone(),
        props.target_timestamp,
    );

    let placement = Placement::new(props.x, props.y, props.size);
    let layout = MarkerLayout::for_placement(&placement);

    let on_marker_down = {
        let container_ref = container_ref.clone();
        let controller = controller.clone();
        let dragging = dragging.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let rect = container_rect(&container_ref);
            let (marker_left, marker_top) = rect.map_or((0.0, 0.0), |rect| {
                let (left, top) = layout.pixel_origin(rect.width);
                (rect.left + left, rect.top + top)
            });
            let started = controller.borrow_mut().pointer_down(
                f64::from(e.client_x()),
                f64::from(e.client_y()),
                marker_left,
                marker_top,
                rect,
            );
            if started {
                dragging.set(true);
            }
        })
    };

    let on_document_move = {
        let container_ref = container_ref.clone();
        let controller = controller.clone();
        let latest = latest.clone();
        Callback::from(move |e: MouseEvent| {
            let (size, on_position_change) = {
                let latest = latest.borrow();
                (latest.size, latest.on_position_change.clone())
            };
            let position = controller.borrow().pointer_move(
                f64::from(e.client_x()),
                f64::from(e.client_y()),
                container_rect(&container_ref),
                size,
            );
            if let Some(position) = position {
                on_position_change.emit(position);
            }
        })
    };

    let on_document_up = {
        let controller = controller.clone();
        let dragging = dragging.clone();
        Callback::from(move |()| {
            controller.borrow_mut().pointer_up();
            dragging.set(false);
        })
    };

    use_document_drag(*dragging, on_document_move, on_document_up);

    let on_size_input = {
        let on_size_change = props.on_size_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(size) = input.value().parse::<f64>() {
                on_size_change.emit(size);
            }
        })
    };

    let marker_style = format!(
        "left: {}%; top: {}%; width: {}%;",
        layout.left_percent, layout.top_percent, layout.width_percent
    );
    let glyph_size = layout.pixel_size(frame_width).round().max(24.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let glyph_size = glyph_size as u32;

    let backdrop = match &props.media_url {
        Some(url) => html! {
            <video
                ref={video_ref}
                class="qr-helper-video"
                src={url.clone()}
                muted={true}
                playsinline={true}
                preload="metadata"
            />
        },
        None => html! {
            <div class="qr-helper-placeholder">{ "Video Preview Area" }</div>
        },
    };

    html! {
        <div class="qr-helper">
            <p class="qr-helper-hint">{ "Drag the QR code to position it on the video" }</p>
            <div ref={container_ref} class={classes!("qr-helper-frame", (*dragging).then_some("dragging"))}>
                { backdrop }
                { for GUIDE_LINES.iter().map(|at| html! {
                    <>
                        <div class="qr-helper-guide vertical" style={format!("left: {at}%;")} />
                        <div class="qr-helper-guide horizontal" style={format!("top: {at}%;")} />
                    </>
                }) }
                <div
                    class={classes!("qr-helper-marker", (*dragging).then_some("dragging"))}
                    style={marker_style}
                    onmousedown={on_marker_down}
                >
                    <QrGlyph value={props.marker_target_url.clone()} size={glyph_size} />
                </div>
            </div>

            <label class="qr-helper-size">
                <span>{ format!("QR Code Size: {}", percent_label(props.size)) }</span>
                <input
                    type="range"
                    min={MIN_SIZE.to_string()}
                    max={MAX_SIZE.to_string()}
                    step={SIZE_STEP.to_string()}
                    value={props.size.to_string()}
                    list="qr-size-marks"
                    oninput={on_size_input}
                />
                <datalist id="qr-size-marks">
                    { for SIZE_MARKS.iter().map(|mark| html! {
                        <option value={mark.to_string()} label={percent_label(*mark)} />
                    }) }
                </datalist>
            </label>

            <div class="qr-helper-readout">
                <span>{ format!("X: {}", percent_label(placement.x())) }</span>
                <span>{ format!("Y: {}", percent_label(placement.y())) }</span>
                <span>{ format!("Size: {}", percent_label(placement.size())) }</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;
    use web_sys::Element;
    use yew::AppHandle;

    use super::*;
    use crate::test_util::{dispatch_on, dispatch_on_document, mount_root, settle};

    wasm_bindgen_test_configure!(run_in_browser);

    const FRAME_CSS: &str = ".qr-helper-frame { position: relative; width: 640px; height: 360px; }";

    type Positions = Rc<RefCell<Vec<(f64, f64)>>>;

    fn mount() -> (Element, AppHandle<QrPositionHelper>, Positions) {
        let positions = Positions::default();
        let recorded = positions.clone();
        let root = mount_root(FRAME_CSS);
        let handle = yew::Renderer::<QrPositionHelper>::with_root_and_props(
            root.clone(),
            QrPositionHelperProps {
                x: 0.0,
                y: 0.0,
                size: 0.15,
                on_position_change: Callback::from(move |position| {
                    recorded.borrow_mut().push(position);
                }),
                on_size_change: Callback::noop(),
                marker_target_url: AttrValue::Static("https://example.com"),
                media_url: None,
                target_timestamp: 0.0,
            },
        )
        .render();
        (root, handle, positions)
    }

    fn find(root: &Element, selector: &str) -> Element {
        root.query_selector(selector).unwrap().unwrap()
    }

    /// Presses the marker 10px inside the frame's top-left corner.
    #[allow(clippy::cast_possible_truncation)]
    fn press_marker(root: &Element) -> (i32, i32) {
        let rect = find(root, ".qr-helper-frame").get_bounding_client_rect();
        let x = rect.left().round() as i32 + 10;
        let y = rect.top().round() as i32 + 10;
        dispatch_on(&find(root, ".qr-helper-marker"), "mousedown", x, y);
        (x, y)
    }

    #[wasm_bindgen_test]
    async fn test_drag_follows_document_until_release() {
        let (root, handle, positions) = mount();
        settle().await;

        let (x, y) = press_marker(&root);
        settle().await;
        assert!(find(&root, ".qr-helper-frame").class_name().contains("dragging"));

        // Half of the 0.85 horizontal travel of a 640px frame.
        dispatch_on_document("mousemove", x + 272, y);
        {
            let positions = positions.borrow();
            assert_eq!(positions.len(), 1);
            let (moved_x, moved_y) = positions[0];
            assert!((moved_x - 0.5).abs() < 0.011);
            assert_eq!(moved_y, 0.0);
        }

        dispatch_on_document("mouseup", x + 272, y);
        settle().await;
        assert!(!find(&root, ".qr-helper-frame").class_name().contains("dragging"));

        dispatch_on_document("mousemove", x + 100, y + 50);
        assert_eq!(positions.borrow().len(), 1);

        handle.destroy();
    }

    #[wasm_bindgen_test]
    async fn test_unmount_mid_drag_stops_position_updates() {
        let (root, handle, positions) = mount();
        settle().await;

        let (x, y) = press_marker(&root);
        settle().await;
        dispatch_on_document("mousemove", x + 50, y);
        assert_eq!(positions.borrow().len(), 1);

        handle.destroy();
        settle().await;
        dispatch_on_document("mousemove", x + 120, y + 40);
        assert_eq!(positions.borrow().len(), 1);
    }
}
