//! Multipart upload over `XMLHttpRequest`, the only browser API with upload
//! progress events.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo::events::EventListener;
use urbi_core::ApiError;
use urbi_core::model::{NewVideo, UploadProgress};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, ProgressEvent, XmlHttpRequest};
use yew::Callback;

fn js_error(value: JsValue) -> ApiError {
    ApiError::Request(format!("{value:?}"))
}

/// Sends `file` and the form fields of `video` as `multipart/form-data`.
///
/// Resolves with the HTTP status and raw body once the request finishes.
/// A network failure or abort maps to [`ApiError::NoConnection`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) async fn send_multipart(
    url: &str,
    token: Option<&str>,
    file: &web_sys::File,
    video: &NewVideo,
    on_progress: Callback<UploadProgress>,
) -> Result<(u16, String), ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("video", file, &file.name())
        .map_err(js_error)?;
    for (name, value) in video.form_fields() {
        form.append_with_str(name, &value).map_err(js_error)?;
    }

    let xhr = XmlHttpRequest::new().map_err(js_error)?;
    xhr.open("POST", url).map_err(js_error)?;
    if let Some(token) = token {
        xhr.set_request_header("Authorization", &format!("Bearer {token}"))
            .map_err(js_error)?;
    }

    let upload = xhr.upload().map_err(js_error)?;
    let _progress = EventListener::new(&upload, "progress", move |event| {
        let Some(event) = event.dyn_ref::<ProgressEvent>() else {
            return;
        };
        if event.length_computable() {
            on_progress.emit(UploadProgress {
                loaded: event.loaded() as u64,
                total: event.total() as u64,
            });
        }
    });

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let finish = |completed: bool| {
        let tx = tx.clone();
        move |_: &web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(completed);
            }
        }
    };
    let _load = EventListener::once(&xhr, "load", finish(true));
    let _error = EventListener::once(&xhr, "error", finish(false));
    let _abort = EventListener::once(&xhr, "abort", finish(false));

    xhr.send_with_opt_form_data(Some(&form)).map_err(js_error)?;

    if !rx.await.unwrap_or(false) {
        tracing::warn!("Upload to {url} failed without a response");
        return Err(ApiError::NoConnection);
    }

    let status = xhr.status().map_err(js_error)?;
    let body = xhr.response_text().map_err(js_error)?.unwrap_or_default();
    Ok((status, body))
}
