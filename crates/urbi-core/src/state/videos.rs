//! Video list state.

use crate::model::{PublishStatus, Video};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoState {
    pub videos: Vec<Video>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Current upload, in whole percent.
    pub upload_progress: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VideoAction {
    FetchPending,
    FetchFulfilled(Vec<Video>),
    FetchRejected(String),
    CreatePending,
    CreateFulfilled(Video),
    CreateRejected(String),
    UpdatePending,
    UpdateFulfilled(Video),
    UpdateRejected(String),
    DeletePending,
    /// Id of the removed video.
    DeleteFulfilled(String),
    DeleteRejected(String),
    SetUploadProgress(u8),
    ClearError,
}

impl VideoState {
    pub fn apply(&mut self, action: VideoAction) {
        match action {
            VideoAction::FetchPending | VideoAction::CreatePending => {
                self.is_loading = true;
                self.error = None;
            }
            VideoAction::FetchFulfilled(videos) => {
                self.is_loading = false;
                self.videos = videos;
            }
            VideoAction::FetchRejected(message) | VideoAction::CreateRejected(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            VideoAction::CreateFulfilled(video) => {
                self.is_loading = false;
                self.videos.insert(0, video);
            }
            VideoAction::UpdatePending | VideoAction::DeletePending | VideoAction::ClearError => {
                self.error = None;
            }
            VideoAction::UpdateFulfilled(video) => {
                if let Some(slot) = self.videos.iter_mut().find(|v| v.id == video.id) {
                    *slot = video;
                }
            }
            VideoAction::DeleteFulfilled(id) => self.videos.retain(|v| v.id != id),
            VideoAction::UpdateRejected(message) | VideoAction::DeleteRejected(message) => {
                self.error = Some(message);
            }
            VideoAction::SetUploadProgress(percent) => self.upload_progress = percent.min(100),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|video| video.id == id)
    }

    /// Videos matching `filter`, all of them for `None`.
    pub fn filtered(&self, filter: Option<PublishStatus>) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|video| filter.is_none_or(|status| video.publish_status == status))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, status: PublishStatus) -> Video {
        Video {
            id: id.to_string(),
            file_name: format!("{id}.mp4"),
            video_url: format!("https://cdn.example.com/{id}.mp4"),
            link_to_action: String::new(),
            publish_status: status,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
            show_link_at: None,
            qr_code_x: None,
            qr_code_y: None,
            qr_code_size: None,
        }
    }

    fn loaded() -> VideoState {
        let mut state = VideoState::default();
        state.apply(VideoAction::FetchPending);
        state.apply(VideoAction::FetchFulfilled(vec![
            video("a", PublishStatus::Published),
            video("b", PublishStatus::Unpublished),
            video("c", PublishStatus::Published),
        ]));
        state
    }

    #[test]
    fn test_fetch() {
        let state = loaded();
        assert!(!state.is_loading);
        assert_eq!(state.videos.len(), 3);
    }

    #[test]
    fn test_create_prepends() {
        let mut state = loaded();
        state.apply(VideoAction::CreatePending);
        state.apply(VideoAction::CreateFulfilled(video("z", PublishStatus::InternalOnly)));
        assert_eq!(state.videos[0].id, "z");
        assert!(!state.is_loading);
    }

    #[test]
    fn test_update_replaces_matching_video() {
        let mut state = loaded();
        let mut updated = video("b", PublishStatus::Published);
        updated.qr_code_x = Some(0.4);
        state.apply(VideoAction::UpdateFulfilled(updated.clone()));
        assert_eq!(state.find("b"), Some(&updated));

        state.apply(VideoAction::UpdateFulfilled(video("missing", PublishStatus::Published)));
        assert_eq!(state.videos.len(), 3);
    }

    #[test]
    fn test_delete_removes_video() {
        let mut state = loaded();
        state.apply(VideoAction::DeleteFulfilled("a".to_string()));
        assert!(state.find("a").is_none());
        assert_eq!(state.videos.len(), 2);
    }

    #[test]
    fn test_errors() {
        let mut state = loaded();
        state.apply(VideoAction::DeleteRejected("Failed to delete video".to_string()));
        assert_eq!(state.error.as_deref(), Some("Failed to delete video"));
        state.apply(VideoAction::ClearError);
        assert!(state.error.is_none());

        state.apply(VideoAction::CreatePending);
        state.apply(VideoAction::CreateRejected("Failed to upload video".to_string()));
        assert!(!state.is_loading);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_filter_by_status() {
        let state = loaded();
        assert_eq!(state.filtered(None).len(), 3);
        let published: Vec<_> = state
            .filtered(Some(PublishStatus::Published))
            .into_iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(published, vec!["a", "c"]);
        assert!(state.filtered(Some(PublishStatus::InternalOnly)).is_empty());
    }

    #[test]
    fn test_upload_progress_is_capped() {
        let mut state = VideoState::default();
        state.apply(VideoAction::SetUploadProgress(150));
        assert_eq!(state.upload_progress, 100);
    }
}
