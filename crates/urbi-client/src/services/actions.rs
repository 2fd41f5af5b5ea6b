//! Async operations that call the API and report back through the store.
//!
//! Each function dispatches a pending action, performs the request and then
//! dispatches either the fulfilled or the rejected action. Failures are also
//! raised as error alerts; callers only decide what to do on success.

use tracing::{error, info};
use urbi_core::model::{
    CreateLinkRequest, Link, LinkHit, LoginRequest, NewVideo, UpdateVideoRequest, UploadProgress,
    Video,
};
use urbi_core::state::{AlertAction, AuthAction, LinkAction, Severity, VideoAction};
use urbi_core::{AppAction, ApiError};
use yew::Callback;

use super::ApiClient;
use crate::state::StoreContext;
use crate::storage::StoredSession;

fn client(store: &StoreContext) -> ApiClient {
    ApiClient::new(store.auth.token.clone())
}

/// Shows an alert.
pub fn notify(store: &StoreContext, message: impl Into<String>, severity: Severity) {
    store.dispatch(AlertAction::show(message, severity).into());
}

fn fail(store: &StoreContext, err: &ApiError, rejected: impl Into<AppAction>) {
    error!("{err}");
    store.dispatch(rejected.into());
    notify(store, err.to_string(), Severity::Error);
    expire_session(store, err);
}

fn expire_session(store: &StoreContext, err: &ApiError) {
    if store.auth.is_expired_by(err) {
        logout(store);
    }
}

pub async fn login(store: StoreContext, credentials: LoginRequest) -> Result<(), ApiError> {
    store.dispatch(AuthAction::LoginPending.into());
    match ApiClient::new(None).login(&credentials).await {
        Ok(response) => {
            let session = StoredSession {
                token: response.token,
                user: response.data,
            };
            if let Err(e) = session.save() {
                error!("Failed to persist session: {e}");
            }
            info!("Signed in as {}", session.user.phone_number);
            store.dispatch(
                AuthAction::LoginFulfilled {
                    user: session.user,
                    token: session.token,
                }
                .into(),
            );
            Ok(())
        }
        Err(e) => {
            fail(&store, &e, AuthAction::LoginRejected(e.to_string()));
            Err(e)
        }
    }
}

/// Auth action restoring the session saved by the last login, if any.
pub fn restore_session() -> AuthAction {
    match StoredSession::load() {
        Some(session) => {
            info!("Restored session for {}", session.user.phone_number);
            AuthAction::Restored {
                user: session.user,
                token: session.token,
            }
        }
        None => AuthAction::RestoreFailed,
    }
}

pub fn logout(store: &StoreContext) {
    StoredSession::clear();
    info!("Signed out");
    store.dispatch(AuthAction::Logout.into());
}

pub async fn fetch_videos(store: StoreContext) {
    store.dispatch(VideoAction::FetchPending.into());
    match client(&store).videos().await {
        Ok(videos) => store.dispatch(VideoAction::FetchFulfilled(videos).into()),
        Err(e) => fail(&store, &e, VideoAction::FetchRejected(e.to_string())),
    }
}

/// Uploads a video, tracking progress in `VideoState::upload_progress`.
pub async fn create_video(
    store: StoreContext,
    file: web_sys::File,
    video: NewVideo,
) -> Result<Video, ApiError> {
    store.dispatch(VideoAction::CreatePending.into());
    store.dispatch(VideoAction::SetUploadProgress(0).into());

    let progress_store = store.clone();
    let on_progress = Callback::from(move |progress: UploadProgress| {
        progress_store.dispatch(VideoAction::SetUploadProgress(progress.percentage()).into());
    });

    let result = client(&store).create_video(&file, &video, on_progress).await;
    store.dispatch(VideoAction::SetUploadProgress(0).into());
    match result {
        Ok(created) => {
            info!("Uploaded {}", created.file_name);
            store.dispatch(VideoAction::CreateFulfilled(created.clone()).into());
            Ok(created)
        }
        Err(e) => {
            fail(&store, &e, VideoAction::CreateRejected(e.to_string()));
            Err(e)
        }
    }
}

pub async fn update_video(
    store: StoreContext,
    id: String,
    update: UpdateVideoRequest,
) -> Result<Video, ApiError> {
    store.dispatch(VideoAction::UpdatePending.into());
    match client(&store).update_video(&id, &update).await {
        Ok(video) => {
            store.dispatch(VideoAction::UpdateFulfilled(video.clone()).into());
            Ok(video)
        }
        Err(e) => {
            fail(&store, &e, VideoAction::UpdateRejected(e.to_string()));
            Err(e)
        }
    }
}

pub async fn delete_video(store: StoreContext, id: String) -> Result<(), ApiError> {
    store.dispatch(VideoAction::DeletePending.into());
    match client(&store).delete_video(&id).await {
        Ok(()) => {
            info!("Deleted video {id}");
            store.dispatch(VideoAction::DeleteFulfilled(id).into());
            Ok(())
        }
        Err(e) => {
            fail(&store, &e, VideoAction::DeleteRejected(e.to_string()));
            Err(e)
        }
    }
}

pub async fn fetch_links(store: StoreContext) {
    store.dispatch(LinkAction::FetchPending.into());
    match client(&store).links().await {
        Ok(links) => store.dispatch(LinkAction::FetchFulfilled(links).into()),
        Err(e) => fail(&store, &e, LinkAction::FetchRejected(e.to_string())),
    }
}

pub async fn create_link(store: StoreContext, target_link: String) -> Result<Link, ApiError> {
    store.dispatch(LinkAction::CreatePending.into());
    match client(&store)
        .create_link(&CreateLinkRequest { target_link })
        .await
    {
        Ok(link) => {
            store.dispatch(LinkAction::CreateFulfilled(link.clone()).into());
            Ok(link)
        }
        Err(e) => {
            fail(&store, &e, LinkAction::CreateRejected(e.to_string()));
            Err(e)
        }
    }
}

/// Loads the hits of one link. Not stored; the links tab keeps them locally
/// and reports failures itself, but a rejected session still signs out.
pub async fn link_hits(store: StoreContext, id: String) -> Result<Vec<LinkHit>, ApiError> {
    let result = client(&store).link_hits(&id).await;
    if let Err(e) = &result {
        expire_session(&store, e);
    }
    result
}
