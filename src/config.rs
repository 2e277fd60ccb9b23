use web_sys::window;

pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7089";

// <meta name="rsvp-api-base-url" content="https://api.example.com"> in index.html
const META_OVERRIDE_NAME: &str = "rsvp-api-base-url";

/// Where the RSVP backend lives.
///
/// Resolved once at startup: a `<meta>` override in the hosting page wins,
/// then `API_BASE_URL` as seen by the compiler, then the local dev default.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL
        } else {
            trimmed
        };
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn resolve() -> Self {
        match read_meta_override() {
            Some(v) if !v.trim().is_empty() => Self::new(&v),
            _ => Self::from_build_env(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    pub fn validate_url(&self) -> String {
        format!("{}/codes/validate", self.base_url)
    }

    pub fn rsvp_url(&self) -> String {
        format!("{}/rsvp", self.base_url)
    }
}

fn read_meta_override() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc
        .query_selector(&format!("meta[name=\"{META_OVERRIDE_NAME}\"]"))
        .ok()??;
    el.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_and_whitespace_are_stripped() {
        let cfg = ApiConfig::new("  https://rsvp.example.com//  ");
        assert_eq!(cfg.base_url(), "https://rsvp.example.com");
        assert_eq!(cfg.validate_url(), "https://rsvp.example.com/codes/validate");
        assert_eq!(cfg.rsvp_url(), "https://rsvp.example.com/rsvp");
    }

    #[test]
    fn blank_base_falls_back_to_default() {
        assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(ApiConfig::new("/").base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(ApiConfig::default().base_url(), "https://localhost:7089");
    }

    #[test]
    fn default_endpoints() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.validate_url(), "https://localhost:7089/codes/validate");
        assert_eq!(cfg.rsvp_url(), "https://localhost:7089/rsvp");
    }

    #[test]
    fn secure_flag_tracks_scheme() {
        assert!(ApiConfig::default().is_secure());
        assert!(!ApiConfig::new("http://127.0.0.1:8787").is_secure());
    }
}
