//! Pluggable per-site selector sets.
//!
//! The searcher and submitter depend only on [`SiteAdapter`]; supporting a
//! new job site means adding an adapter, not touching the pipeline.

use crate::driver::Selector;
use url::Url;

/// Selector set for one job site's search-and-apply surfaces.
///
/// Row-scoped selectors (`listing_*`) are resolved relative to one element
/// returned by `listing_rows`.
pub trait SiteAdapter: Send + Sync {
    /// Human-readable adapter name, for logs.
    fn name(&self) -> &str;

    /// Full URL of the search surface, derived from the user-entered site
    /// address.
    fn search_url(&self, site_url: &str) -> String;

    fn search_box(&self) -> Selector;

    fn listing_rows(&self) -> Selector;
    fn listing_title(&self) -> Selector;
    fn listing_company(&self) -> Selector;
    fn listing_location(&self) -> Selector;
    fn listing_link(&self) -> Selector;

    fn apply_action(&self) -> Selector;

    fn form_fields(&self) -> Selector;

    /// Attribute carrying a form field's question label.
    fn field_label_attribute(&self) -> &str {
        "aria-label"
    }

    fn upload_control(&self) -> Selector;
    fn submit_control(&self) -> Selector;
}

/// Normalize a user-entered site address into an absolute https URL.
pub fn normalize_site_url(site_url: &str) -> String {
    match Url::parse(site_url) {
        Ok(url) => url.to_string(),
        Err(_) => format!("https://{}", site_url.trim_start_matches('/')),
    }
}

/// Adapter for LinkedIn's job search and Easy Apply layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedinAdapter;

impl SiteAdapter for LinkedinAdapter {
    fn name(&self) -> &str {
        "linkedin"
    }

    fn search_url(&self, site_url: &str) -> String {
        normalize_site_url(site_url)
    }

    fn search_box(&self) -> Selector {
        Selector::xpath("//input[contains(@placeholder, 'Search jobs')]")
    }

    fn listing_rows(&self) -> Selector {
        Selector::xpath("//ul[@class='jobs-search__results-list']/li")
    }

    fn listing_title(&self) -> Selector {
        Selector::xpath(".//a[@class='job-card-list__title']")
    }

    fn listing_company(&self) -> Selector {
        Selector::xpath(
            ".//a[@class='job-card-container__link job-card-container__company-name ember-view']",
        )
    }

    fn listing_location(&self) -> Selector {
        Selector::xpath(".//span[@class='job-card-container__metadata-item']")
    }

    fn listing_link(&self) -> Selector {
        Selector::xpath(".//a[@class='job-card-list__title']")
    }

    fn apply_action(&self) -> Selector {
        Selector::xpath("//button[contains(text(), 'Easy Apply')]")
    }

    fn form_fields(&self) -> Selector {
        Selector::xpath("//form//input")
    }

    fn upload_control(&self) -> Selector {
        Selector::xpath("//input[@type='file']")
    }

    fn submit_control(&self) -> Selector {
        Selector::xpath("//button[@type='submit']")
    }
}
