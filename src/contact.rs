//! Contact and profile shortcut buttons
//!
//! Buttons opt in with a `data-action` tag; their label text plays no part.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::SiteConfig;

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component the way browsers' `encodeURIComponent` does
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Behaviour selected by a button's `data-action` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    /// Open the mail client with a pre-filled message
    Contact,
    GitHub,
    LinkedIn,
}

impl ContactAction {
    pub fn as_tag(&self) -> &'static str {
        match self {
            ContactAction::Contact => "contact",
            ContactAction::GitHub => "github",
            ContactAction::LinkedIn => "linkedin",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "contact" => Some(ContactAction::Contact),
            "github" => Some(ContactAction::GitHub),
            "linkedin" => Some(ContactAction::LinkedIn),
            _ => None,
        }
    }

    pub fn egress(&self, config: &SiteConfig) -> Egress {
        match self {
            ContactAction::Contact => {
                Egress::Navigate(mailto_uri(&config.email, &config.subject, &config.body))
            }
            ContactAction::GitHub => Egress::OpenNewContext(config.github_url.clone()),
            ContactAction::LinkedIn => Egress::OpenNewContext(config.linkedin_url.clone()),
        }
    }
}

/// Where a shortcut sends the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Egress {
    /// Replace the current location (suppressing the default click)
    Navigate(String),
    /// `window.open(url, "_blank")`
    OpenNewContext(String),
}

pub fn mailto_uri(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        email,
        encode_component(subject),
        encode_component(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_matches_uri_component() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("Cześć\n"), "Cze%C5%9B%C4%87%0A");
    }

    #[test]
    fn test_mailto_uri() {
        let uri = mailto_uri("me@example.com", "Hi there", "Line 1\nLine 2");
        assert_eq!(
            uri,
            "mailto:me@example.com?subject=Hi%20there&body=Line%201%0ALine%202"
        );
    }

    #[test]
    fn test_default_contact_egress() {
        let config = SiteConfig::default();
        let Egress::Navigate(uri) = ContactAction::Contact.egress(&config) else {
            panic!("contact should navigate");
        };
        assert!(uri.starts_with("mailto:erikk777coding@gmail.com?subject=Kontakt%20ze%20strony%20portfolio&body="));
        assert!(uri.ends_with("Pisz%C4%99%20w%20sprawie..."));
    }

    #[test]
    fn test_profile_egress() {
        let config = SiteConfig::default();
        assert_eq!(
            ContactAction::GitHub.egress(&config),
            Egress::OpenNewContext("https://github.com".to_string())
        );
        assert_eq!(
            ContactAction::LinkedIn.egress(&config),
            Egress::OpenNewContext("https://linkedin.com".to_string())
        );
    }

    #[test]
    fn test_tags() {
        assert_eq!(ContactAction::from_tag("GitHub"), Some(ContactAction::GitHub));
        assert_eq!(ContactAction::from_tag(" contact "), Some(ContactAction::Contact));
        assert_eq!(ContactAction::from_tag("Napisz do mnie"), None);
        for action in [ContactAction::Contact, ContactAction::GitHub, ContactAction::LinkedIn] {
            assert_eq!(ContactAction::from_tag(action.as_tag()), Some(action));
        }
    }

    proptest! {
        #[test]
        fn prop_encoded_output_is_uri_safe(input in ".*") {
            let encoded = encode_component(&input);
            let bytes = encoded.as_bytes();
            let mut i = 0;
            while i < bytes.len() {
                let b = bytes[i];
                if b == b'%' {
                    prop_assert!(i + 2 < bytes.len());
                    prop_assert!(bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit());
                    i += 3;
                } else {
                    prop_assert!(b.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&b));
                    i += 1;
                }
            }
        }
    }
}
