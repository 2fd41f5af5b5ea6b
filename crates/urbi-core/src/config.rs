//! Application configuration.

/// Base URL used by release builds (same origin, proxied).
pub const PRODUCTION_BASE_URL: &str = "/api";
/// Base URL used by debug builds.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8080/api";

/// Static configuration for the admin client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: &'static str,
    pub base_url: String,
    pub token_key: &'static str,
    pub user_key: &'static str,
    /// How long an alert stays visible before it dismisses itself.
    pub alert_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(default_base_url())
    }
}

impl AppConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            app_name: "Urbi Admin",
            base_url: base_url.trim_end_matches('/').to_string(),
            token_key: "auth_token",
            user_key: "user_data",
            alert_timeout_ms: 6000,
        }
    }

    pub fn endpoints(&self) -> Endpoints<'_> {
        Endpoints {
            base_url: &self.base_url,
        }
    }
}

/// Picks the API base URL at compile time.
///
/// `URBI_API_BASE_URL` wins when set; otherwise debug builds talk to the
/// local backend and release builds to `/api`.
pub fn default_base_url() -> &'static str {
    match option_env!("URBI_API_BASE_URL") {
        Some(url) if !url.is_empty() => url,
        _ if cfg!(debug_assertions) => DEVELOPMENT_BASE_URL,
        _ => PRODUCTION_BASE_URL,
    }
}

/// REST endpoint URLs.
#[derive(Debug, Clone, Copy)]
pub struct Endpoints<'a> {
    base_url: &'a str,
}

impl Endpoints<'_> {
    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    pub fn videos(&self) -> String {
        format!("{}/videos", self.base_url)
    }

    pub fn video(&self, id: &str) -> String {
        format!("{}/videos/{id}", self.base_url)
    }

    pub fn video_status(&self, id: &str) -> String {
        format!("{}/videos/{id}/status", self.base_url)
    }

    pub fn links(&self) -> String {
        format!("{}/links", self.base_url)
    }

    pub fn link_hits(&self, id: &str) -> String {
        format!("{}/links/{id}/hits", self.base_url)
    }

    /// Public short-link URL, the value encoded into QR codes.
    pub fn link_redirect(&self, id: &str) -> String {
        format!("{}/links/redirect/{id}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let config = AppConfig::with_base_url("https://admin.example.com/api/");
        let endpoints = config.endpoints();
        assert_eq!(endpoints.login(), "https://admin.example.com/api/auth/login");
        assert_eq!(endpoints.videos(), "https://admin.example.com/api/videos");
        assert_eq!(endpoints.video("v1"), "https://admin.example.com/api/videos/v1");
        assert_eq!(
            endpoints.video_status("v1"),
            "https://admin.example.com/api/videos/v1/status"
        );
        assert_eq!(endpoints.links(), "https://admin.example.com/api/links");
        assert_eq!(endpoints.link_hits("l1"), "https://admin.example.com/api/links/l1/hits");
        assert_eq!(
            endpoints.link_redirect("l1"),
            "https://admin.example.com/api/links/redirect/l1"
        );
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.app_name, "Urbi Admin");
        assert_eq!(config.token_key, "auth_token");
        assert_eq!(config.user_key, "user_data");
        assert!(!config.base_url.ends_with('/'));
    }
}
