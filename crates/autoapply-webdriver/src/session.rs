//! Fantoccini-backed implementation of the [`Driver`] seam.
//!
//! Connects to an external WebDriver server whose browser session is
//! assumed to be authenticated already. Live `Element`s are kept behind
//! opaque handles; navigation invalidates all outstanding handles.

use async_trait::async_trait;
use autoapply_core::driver::{Driver, DriverError, ElementHandle, Selector};
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};
use std::collections::HashMap;
use tracing::info;

pub struct WebDriverSession {
    client: Option<Client>,
    elements: HashMap<u64, Element>,
    next_id: u64,
}

impl WebDriverSession {
    /// Connect to a running WebDriver server.
    pub async fn connect(webdriver_url: &str) -> Result<Self, DriverError> {
        info!("Connecting to WebDriver at {}...", webdriver_url);
        let client = ClientBuilder::native()
            .connect(webdriver_url)
            .await
            .map_err(|e| {
                DriverError::Other(format!(
                    "Failed to connect to WebDriver at {}: {}",
                    webdriver_url, e
                ))
            })?;
        Ok(Self {
            client: Some(client),
            elements: HashMap::new(),
            next_id: 1,
        })
    }

    fn client(&mut self) -> Result<&mut Client, DriverError> {
        self.client.as_mut().ok_or(DriverError::NotReady)
    }

    fn register(&mut self, element: Element) -> ElementHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(id, element);
        ElementHandle(id)
    }

    fn resolve(&self, handle: ElementHandle) -> Result<&Element, DriverError> {
        self.elements
            .get(&handle.0)
            .ok_or(DriverError::StaleHandle(handle))
    }

    fn locator(selector: &Selector) -> Locator<'_> {
        match selector {
            Selector::Css(s) => Locator::Css(s),
            Selector::XPath(s) => Locator::XPath(s),
        }
    }
}

#[async_trait]
impl Driver for WebDriverSession {
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        info!("Navigating to: {}", url);
        self.client()?
            .goto(url)
            .await
            .map_err(|e| DriverError::Navigation(e.to_string()))?;
        // Handles from the previous page are dead now.
        self.elements.clear();
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String, DriverError> {
        let url = self
            .client()?
            .current_url()
            .await
            .map_err(|e| DriverError::Other(e.to_string()))?;
        Ok(url.to_string())
    }

    async fn find(&mut self, selector: &Selector) -> Result<Option<ElementHandle>, DriverError> {
        let locator = Self::locator(selector);
        match self.client()?.find(locator).await {
            Ok(element) => Ok(Some(self.register(element))),
            Err(e) if e.is_no_such_element() => Ok(None),
            Err(e) => Err(DriverError::Other(e.to_string())),
        }
    }

    async fn find_all(&mut self, selector: &Selector) -> Result<Vec<ElementHandle>, DriverError> {
        let locator = Self::locator(selector);
        let elements = self
            .client()?
            .find_all(locator)
            .await
            .map_err(|e| DriverError::Other(e.to_string()))?;
        Ok(elements
            .into_iter()
            .map(|element| self.register(element))
            .collect())
    }

    async fn find_within(
        &mut self,
        scope: ElementHandle,
        selector: &Selector,
    ) -> Result<Option<ElementHandle>, DriverError> {
        let locator = Self::locator(selector);
        match self.resolve(scope)?.clone().find(locator).await {
            Ok(element) => Ok(Some(self.register(element))),
            Err(e) if e.is_no_such_element() => Ok(None),
            Err(e) => Err(DriverError::Other(e.to_string())),
        }
    }

    async fn click(&mut self, handle: ElementHandle) -> Result<(), DriverError> {
        self.resolve(handle)?
            .clone()
            .click()
            .await
            .map_err(|e| DriverError::Interaction(format!("Click failed: {}", e)))
    }

    async fn type_text(&mut self, handle: ElementHandle, text: &str) -> Result<(), DriverError> {
        self.resolve(handle)?
            .clone()
            .send_keys(text)
            .await
            .map_err(|e| DriverError::Interaction(format!("Typing failed: {}", e)))
    }

    async fn attribute(
        &mut self,
        handle: ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DriverError> {
        self.resolve(handle)?
            .clone()
            .attr(name)
            .await
            .map_err(|e| DriverError::Other(e.to_string()))
    }

    async fn text(&mut self, handle: ElementHandle) -> Result<String, DriverError> {
        self.resolve(handle)?
            .clone()
            .text()
            .await
            .map_err(|e| DriverError::Other(e.to_string()))
    }

    async fn close(&mut self) -> Result<(), DriverError> {
        if let Some(client) = self.client.take() {
            client
                .close()
                .await
                .map_err(|e| DriverError::Other(format!("Failed to close session: {}", e)))?;
        }
        self.elements.clear();
        Ok(())
    }
}
