//! Blob URLs backing image previews on the form and on cards.

use web_sys::{Blob, Url};

const OBJECT_URL_SCHEME: &str = "blob:";

pub fn create(blob: &Blob) -> Option<String> {
    match Url::create_object_url_with_blob(blob) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("[PREVIEW] could not create preview URL: {:?}", e);
            None
        }
    }
}

pub fn is_object_url(url: &str) -> bool {
    url.starts_with(OBJECT_URL_SCHEME)
}

/// Release a URL made by [`create`]. Plain links are left alone.
pub fn release(url: &str) {
    if !is_object_url(url) {
        return;
    }
    match Url::revoke_object_url(url) {
        Ok(()) => log::debug!("[PREVIEW] released {}", url),
        Err(e) => log::warn!("[PREVIEW] could not release {}: {:?}", url, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_blob_urls_are_released() {
        assert!(is_object_url("blob:http://localhost:8080/3f2a"));
        assert!(!is_object_url("https://cdn.test/cat.png"));
        assert!(!is_object_url("assets/preview.png"));
    }
}
