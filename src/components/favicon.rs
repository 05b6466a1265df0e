//! Favicon Component
//!
//! Site icon for an item card. Fetches the Google favicon service image for
//! the item's host and degrades to an inline placeholder, which is the only
//! error path in the app.

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

/// Inline image placeholder for malformed URLs and failed fetches
pub const PLACEHOLDER_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='32' height='32' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'%3E%3Crect x='3' y='3' width='18' height='18' rx='2' ry='2'/%3E%3Ccircle cx='8.5' cy='8.5' r='1.5'/%3E%3Cpolyline points='21,15 16,10 5,21'/%3E%3C/svg%3E";

const QUERY: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>').add(b'&');

/// Favicon service URL for a website, None when the website does not parse
pub fn favicon_url(website: &str) -> Option<String> {
    let parsed = Url::parse(website).ok()?;
    let host = parsed.host_str()?.to_string();
    Some(format!(
        "https://www.google.com/s2/favicons?domain={}&sz=64",
        utf8_percent_encode(&host, QUERY)
    ))
}

/// Favicon image with silent placeholder fallback
#[component]
pub fn Favicon(website: String, alt: String) -> impl IntoView {
    let (load_failed, set_load_failed) = signal(false);
    let service_url = favicon_url(&website);

    let src = move || {
        if load_failed.get() {
            return PLACEHOLDER_ICON.to_string();
        }
        service_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_ICON.to_string())
    };

    view! {
        <img
            class="favicon"
            src=src
            alt=alt
            on:error=move |_| set_load_failed.set(true)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_url_extracts_host() {
        assert_eq!(
            favicon_url("https://qanda.ai/ko").as_deref(),
            Some("https://www.google.com/s2/favicons?domain=qanda.ai&sz=64")
        );
        assert_eq!(
            favicon_url("https://www.i-scream.co.kr/main/index.do").as_deref(),
            Some("https://www.google.com/s2/favicons?domain=www.i-scream.co.kr&sz=64")
        );
    }

    #[test]
    fn test_favicon_url_malformed_website() {
        assert!(favicon_url("준비 중").is_none());
        assert!(favicon_url("").is_none());
        assert!(favicon_url("htp:/broken").is_none());
    }
}
