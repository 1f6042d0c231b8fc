//! The session-driver seam: everything the pipeline needs from a browser.
//!
//! Implementations own the underlying browser resource; the pipeline only
//! ever sees opaque [`ElementHandle`]s and talks through this trait, so the
//! engine can be exercised against a scripted in-memory driver in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque reference to a located element, scoped to the driver that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(pub u64);

/// How to locate an element on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selector {
    Css(String),
    XPath(String),
}

impl Selector {
    pub fn css(s: impl Into<String>) -> Self {
        Selector::Css(s.into())
    }

    pub fn xpath(s: impl Into<String>) -> Self {
        Selector::XPath(s.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Css(s) => write!(f, "css:{}", s),
            Selector::XPath(s) => write!(f, "xpath:{}", s),
        }
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Driver not ready")]
    NotReady,

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Stale or unknown element handle: {0:?}")]
    StaleHandle(ElementHandle),

    #[error("Interaction failed: {0}")]
    Interaction(String),

    #[error("Driver error: {0}")]
    Other(String),
}

/// Unified browser interface consumed by the pipeline.
///
/// `find*` methods report "not present" as `Ok(None)` / an empty vec rather
/// than an error; waiting for an element to appear is layered on top by the
/// engine's polling helpers.
#[async_trait]
pub trait Driver: Send {
    /// Navigate the session to a URL and wait for the load to settle.
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError>;

    /// URL of the page currently loaded.
    async fn current_url(&mut self) -> Result<String, DriverError>;

    /// Locate the first element matching `selector`, if any.
    async fn find(&mut self, selector: &Selector) -> Result<Option<ElementHandle>, DriverError>;

    /// Locate every element matching `selector`, in document order.
    async fn find_all(&mut self, selector: &Selector) -> Result<Vec<ElementHandle>, DriverError>;

    /// Locate the first element matching `selector` beneath `scope`.
    async fn find_within(
        &mut self,
        scope: ElementHandle,
        selector: &Selector,
    ) -> Result<Option<ElementHandle>, DriverError>;

    async fn click(&mut self, handle: ElementHandle) -> Result<(), DriverError>;

    /// Send keystrokes to an element (WebDriver `send_keys` semantics; on a
    /// file input this attaches the typed path).
    async fn type_text(&mut self, handle: ElementHandle, text: &str) -> Result<(), DriverError>;

    /// Read an attribute; `Ok(None)` when the attribute is absent.
    async fn attribute(
        &mut self,
        handle: ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DriverError>;

    /// Visible text content of an element.
    async fn text(&mut self, handle: ElementHandle) -> Result<String, DriverError>;

    /// Tear down the session and release the browser.
    async fn close(&mut self) -> Result<(), DriverError>;
}
