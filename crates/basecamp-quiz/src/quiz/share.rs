use serde::Serialize;

use super::domain::PersonalityProfile;
use crate::config::ShareConfig;

/// Query parameter that carries a shared result's category.
pub const DEEP_LINK_PARAM: &str = "result";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub text: String,
    pub url: String,
}

pub fn share_link(profile: &PersonalityProfile, config: &ShareConfig) -> ShareLink {
    let base = config.base_url.trim_end_matches(|c: char| c == '?' || c == '&');
    let separator = if base.contains('?') { '&' } else { '?' };

    ShareLink {
        text: format!(
            "I'm a {}! {} ☕ What's your coffee personality?",
            profile.name, profile.tagline
        ),
        url: format!(
            "{base}{separator}{DEEP_LINK_PARAM}={}",
            profile.category.id()
        ),
    }
}

/// Raw deep-link value from a full URL or a bare query string.
pub fn deep_link_param(link: &str) -> Option<&str> {
    let without_fragment = link.split('#').next().unwrap_or_default();
    let query = match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None => without_fragment,
    };

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == DEEP_LINK_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
