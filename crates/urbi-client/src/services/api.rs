//! Authenticated JSON client for the admin REST API.

use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use urbi_core::model::{
    ApiResponse, CreateLinkRequest, Link, LinkHit, LoginRequest, LoginResponse, NewVideo,
    UpdateVideoRequest, UploadProgress, Video,
};
use urbi_core::{ApiError, Endpoints};
use yew::Callback;

use super::{config, upload};

/// REST client carrying the session token, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    fn endpoints() -> Endpoints<'static> {
        config().endpoints()
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = Self::endpoints().login();
        let request = Request::post(&url)
            .json(credentials)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        debug!("POST {url}");
        read(request.send().await, "Login failed").await
    }

    pub async fn videos(&self) -> Result<Vec<Video>, ApiError> {
        let url = Self::endpoints().videos();
        debug!("GET {url}");
        let response = self.authorize(Request::get(&url)).send().await;
        let envelope: ApiResponse<Vec<Video>> = read(response, "Failed to fetch videos").await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Uploads a new video as multipart form data, reporting progress.
    pub async fn create_video(
        &self,
        file: &web_sys::File,
        video: &NewVideo,
        on_progress: Callback<UploadProgress>,
    ) -> Result<Video, ApiError> {
        let url = Self::endpoints().videos();
        debug!("POST {url} (multipart, {} bytes)", file.size());
        let fallback = "Failed to upload video";
        let (status, body) =
            upload::send_multipart(&url, self.token.as_deref(), file, video, on_progress).await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::from_response(status, &body, fallback));
        }
        let envelope: ApiResponse<Video> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        require_data(envelope, fallback)
    }

    pub async fn update_video(
        &self,
        id: &str,
        update: &UpdateVideoRequest,
    ) -> Result<Video, ApiError> {
        let url = Self::endpoints().video_status(id);
        let request = self
            .authorize(Request::put(&url))
            .json(update)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        debug!("PUT {url}");
        let fallback = "Failed to update video";
        let envelope: ApiResponse<Video> = read(request.send().await, fallback).await?;
        require_data(envelope, fallback)
    }

    pub async fn delete_video(&self, id: &str) -> Result<(), ApiError> {
        let url = Self::endpoints().video(id);
        debug!("DELETE {url}");
        let response = self.authorize(Request::delete(&url)).send().await;
        check(response, "Failed to delete video").await
    }

    pub async fn links(&self) -> Result<Vec<Link>, ApiError> {
        let url = Self::endpoints().links();
        debug!("GET {url}");
        let response = self.authorize(Request::get(&url)).send().await;
        let envelope: ApiResponse<Vec<Link>> = read(response, "Failed to fetch links").await?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn create_link(&self, link: &CreateLinkRequest) -> Result<Link, ApiError> {
        let url = Self::endpoints().links();
        let request = self
            .authorize(Request::post(&url))
            .json(link)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        debug!("POST {url}");
        let fallback = "Failed to create link";
        let envelope: ApiResponse<Link> = read(request.send().await, fallback).await?;
        require_data(envelope, fallback)
    }

    pub async fn link_hits(&self, id: &str) -> Result<Vec<LinkHit>, ApiError> {
        let url = Self::endpoints().link_hits(id);
        debug!("GET {url}");
        let response = self.authorize(Request::get(&url)).send().await;
        let envelope: ApiResponse<Vec<LinkHit>> =
            read(response, "Failed to load link hits").await?;
        Ok(envelope.data.unwrap_or_default())
    }
}

/// Reads a response body, turning transport and status failures into `ApiError`.
async fn body(
    response: Result<Response, gloo::net::Error>,
    fallback: &str,
) -> Result<String, ApiError> {
    let response = response.map_err(|e| {
        warn!("Request failed without a response: {e}");
        ApiError::NoConnection
    })?;
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    debug!("Response status: {status}");
    if !response.ok() {
        warn!("Request failed with HTTP {status}");
        return Err(ApiError::from_response(status, &text, fallback));
    }
    Ok(text)
}

async fn read<T: DeserializeOwned>(
    response: Result<Response, gloo::net::Error>,
    fallback: &str,
) -> Result<T, ApiError> {
    let text = body(response, fallback).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn check(
    response: Result<Response, gloo::net::Error>,
    fallback: &str,
) -> Result<(), ApiError> {
    body(response, fallback).await.map(|_| ())
}

fn require_data<T>(envelope: ApiResponse<T>, fallback: &str) -> Result<T, ApiError> {
    envelope.data.ok_or_else(|| {
        let message = if envelope.message.is_empty() {
            fallback.to_string()
        } else {
            envelope.message
        };
        ApiError::Decode(message)
    })
}
