//! REST payload models.

use serde::{Deserialize, Deserializer, Serialize};

use crate::placement::Placement;

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub phone_number: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Visibility of a video in the consumer app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    Published,
    InternalOnly,
    #[default]
    Unpublished,
}

impl PublishStatus {
    pub const ALL: [PublishStatus; 3] = [Self::Published, Self::InternalOnly, Self::Unpublished];

    /// Wire value, also used as `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::InternalOnly => "internal_only",
            Self::Unpublished => "unpublished",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::InternalOnly => "Internal Only",
            Self::Unpublished => "Unpublished",
        }
    }

    /// Badge colour.
    pub fn color(self) -> &'static str {
        match self {
            Self::Published => "#4caf50",
            Self::InternalOnly => "#ff9800",
            Self::Unpublished => "#f44336",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub file_name: String,
    pub video_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link_to_action: String,
    pub publish_status: PublishStatus,
    pub created_at: String,
    pub updated_at: String,
    /// Seconds into the video; the API does not guarantee whole numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_link_at: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_size: Option<f64>,
}

impl Video {
    /// Marker placement stored on the record, defaults for missing fields.
    pub fn placement(&self) -> Placement {
        Placement::from_stored(self.qr_code_x, self.qr_code_y, self.qr_code_size)
    }

    /// `show_link_at` rounded to whole seconds for the edit form, 0 when unset.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn show_link_at_seconds(&self) -> u32 {
        match self.show_link_at {
            Some(seconds) if seconds.is_finite() && seconds > 0.0 => {
                seconds.round().min(f64::from(u32::MAX)) as u32
            }
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub target_link: String,
}

impl Link {
    /// First eight characters of the id, for compact listings.
    pub fn short_id(&self) -> &str {
        self.id
            .char_indices()
            .nth(8)
            .map_or(self.id.as_str(), |(end, _)| &self.id[..end])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub target_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postal: String,
    #[serde(default)]
    pub region: String,
}

impl Address {
    /// "city, region, country" with empty parts skipped.
    pub fn display(&self) -> String {
        [&self.city, &self.region, &self.country]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkHit {
    pub id: String,
    #[serde(default)]
    pub video_id: String,
    pub ip_address: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub geo_location: Option<GeoLocation>,
}

impl LinkHit {
    /// Coordinates worth showing; a zero latitude means the lookup failed.
    pub fn coordinates(&self) -> Option<GeoLocation> {
        self.geo_location.filter(|geo| geo.latitude != 0.0)
    }
}

/// Envelope used by every endpoint except login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub data: User,
    pub token: String,
}

/// Body of `PUT /videos/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    pub publish_status: PublishStatus,
    pub link_to_action: String,
    pub show_link_at: u32,
    pub qr_code_x: f64,
    pub qr_code_y: f64,
    pub qr_code_size: f64,
}

impl UpdateVideoRequest {
    pub fn new(
        publish_status: PublishStatus,
        link_to_action: String,
        show_link_at: u32,
        placement: Placement,
    ) -> Self {
        Self {
            publish_status,
            link_to_action,
            show_link_at,
            qr_code_x: placement.x(),
            qr_code_y: placement.y(),
            qr_code_size: placement.size(),
        }
    }
}

/// Form values sent alongside an uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVideo {
    pub link_to_action: String,
    pub publish_status: PublishStatus,
    pub show_link_at: u32,
    pub placement: Placement,
}

impl NewVideo {
    /// Multipart text fields, in the order they are appended.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("linkToAction", self.link_to_action.clone()),
            ("publishStatus", self.publish_status.as_str().to_string()),
            ("showLinkAt", self.show_link_at.to_string()),
            ("qrCodeX", self.placement.x().to_string()),
            ("qrCodeY", self.placement.y().to_string()),
            ("qrCodeSize", self.placement.size().to_string()),
        ]
    }
}

/// Bytes sent so far for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    /// Whole percentage, 0 when the total is unknown.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = (self.loaded as f64 * 100.0 / self.total as f64).round();
        percent.clamp(0.0, 100.0) as u8
    }
}
