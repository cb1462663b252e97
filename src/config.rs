//! Site configuration
//!
//! Contact details and acknowledgement messages. Built-in defaults can be
//! overridden per page with an embedded JSON document:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "email": "someone@example.com" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Portfolio contact details and user-facing messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // === Contact ===
    /// Recipient for the mail-client shortcut
    pub email: String,
    /// Pre-filled subject line
    pub subject: String,
    /// Pre-filled message body
    pub body: String,

    // === Profiles ===
    pub github_url: String,
    pub linkedin_url: String,

    // === Acknowledgements ===
    /// Shown after the generic contact form is submitted
    pub form_ack: String,
    /// Shown after a newsletter sign-up
    pub newsletter_ack: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            email: "erikk777coding@gmail.com".to_string(),
            subject: "Kontakt ze strony portfolio".to_string(),
            body: "Cześć Erik,\n\nPiszę w sprawie...".to_string(),

            github_url: "https://github.com".to_string(),
            linkedin_url: "https://linkedin.com".to_string(),

            form_ack: "Dziękujemy za wysłanie formularza! Skontaktujemy się z Tobą w ciągu 24 godzin."
                .to_string(),
            newsletter_ack: "Dziękujemy za zapisanie się do newslettera!".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override; omitted fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an optional override, falling back to defaults on error
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded site config override");
                config
            }
            Some(Err(e)) => {
                log::warn!("{e}, using defaults");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Load from the page's `#site-config` script (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(crate::consts::SITE_CONFIG_ID))
            .and_then(|el| el.text_content());
        Self::from_json_or_default(json.as_deref())
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "email": "me@example.com" }"#).unwrap();
        assert_eq!(config.email, "me@example.com");
        assert_eq!(config.github_url, SiteConfig::default().github_url);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
        assert_eq!(
            SiteConfig::from_json_or_default(Some("{ broken")),
            SiteConfig::default()
        );
        let config = SiteConfig::from_json_or_default(Some(r#"{"github_url":"https://github.com/me"}"#));
        assert_eq!(config.github_url, "https://github.com/me");
    }
}
