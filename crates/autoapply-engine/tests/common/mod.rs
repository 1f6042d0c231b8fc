//! Scripted in-memory driver and generator for pipeline tests.
#![allow(dead_code)] // each test binary uses a subset of the helpers

use async_trait::async_trait;
use autoapply_core::collab::{GenerationError, Generator};
use autoapply_core::driver::{Driver, DriverError, ElementHandle, Selector};
use autoapply_engine::wait::WaitParams;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Fast waits so missing-element cases time out quickly in tests.
pub fn test_wait() -> WaitParams {
    WaitParams::new(Duration::from_millis(100), Duration::from_millis(5))
}

#[derive(Debug, Default, Clone)]
pub struct MockElement {
    pub text: String,
    pub attrs: HashMap<String, String>,
}

impl MockElement {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn with_attr(name: &str, value: &str) -> Self {
        let mut attrs = HashMap::new();
        attrs.insert(name.to_string(), value.to_string());
        Self {
            text: String::new(),
            attrs,
        }
    }
}

/// One page's scripted DOM: selector text to matching element ids, plus
/// row-scoped matches keyed by (scope id, selector text).
#[derive(Debug, Default)]
pub struct MockPage {
    pub matches: HashMap<String, Vec<u64>>,
    pub scoped: HashMap<(u64, String), u64>,
}

impl MockPage {
    pub fn add(&mut self, selector: &Selector, ids: &[u64]) {
        self.matches
            .entry(selector.to_string())
            .or_default()
            .extend_from_slice(ids);
    }

    pub fn add_scoped(&mut self, scope: u64, selector: &Selector, id: u64) {
        self.scoped.insert((scope, selector.to_string()), id);
    }
}

#[derive(Debug, Default)]
pub struct MockDriver {
    pub pages: HashMap<String, MockPage>,
    pub elements: HashMap<u64, MockElement>,
    pub current: Option<String>,
    pub navigations: Vec<String>,
    pub clicked: Vec<u64>,
    pub typed: Vec<(u64, String)>,
    pub navigate_failures: Vec<String>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, id: u64, element: MockElement) {
        self.elements.insert(id, element);
    }

    pub fn page(&mut self, url: &str) -> &mut MockPage {
        self.pages.entry(url.to_string()).or_default()
    }

    fn current_page(&self) -> Result<&MockPage, DriverError> {
        let url = self.current.as_ref().ok_or(DriverError::NotReady)?;
        self.pages
            .get(url)
            .ok_or_else(|| DriverError::Navigation(format!("no page scripted for {}", url)))
    }

    pub fn typed_into(&self, id: u64) -> Vec<&str> {
        self.typed
            .iter()
            .filter(|(target, _)| *target == id)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.navigations.push(url.to_string());
        if self.navigate_failures.iter().any(|u| u == url) {
            return Err(DriverError::Navigation(format!("cannot reach {}", url)));
        }
        self.current = Some(url.to_string());
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String, DriverError> {
        self.current.clone().ok_or(DriverError::NotReady)
    }

    async fn find(&mut self, selector: &Selector) -> Result<Option<ElementHandle>, DriverError> {
        Ok(self.find_all(selector).await?.into_iter().next())
    }

    async fn find_all(&mut self, selector: &Selector) -> Result<Vec<ElementHandle>, DriverError> {
        let page = self.current_page()?;
        Ok(page
            .matches
            .get(&selector.to_string())
            .map(|ids| ids.iter().map(|id| ElementHandle(*id)).collect())
            .unwrap_or_default())
    }

    async fn find_within(
        &mut self,
        scope: ElementHandle,
        selector: &Selector,
    ) -> Result<Option<ElementHandle>, DriverError> {
        let page = self.current_page()?;
        Ok(page
            .scoped
            .get(&(scope.0, selector.to_string()))
            .map(|id| ElementHandle(*id)))
    }

    async fn click(&mut self, handle: ElementHandle) -> Result<(), DriverError> {
        if !self.elements.contains_key(&handle.0) {
            return Err(DriverError::StaleHandle(handle));
        }
        self.clicked.push(handle.0);
        Ok(())
    }

    async fn type_text(&mut self, handle: ElementHandle, text: &str) -> Result<(), DriverError> {
        if !self.elements.contains_key(&handle.0) {
            return Err(DriverError::StaleHandle(handle));
        }
        self.typed.push((handle.0, text.to_string()));
        Ok(())
    }

    async fn attribute(
        &mut self,
        handle: ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DriverError> {
        let element = self
            .elements
            .get(&handle.0)
            .ok_or(DriverError::StaleHandle(handle))?;
        Ok(element.attrs.get(name).cloned())
    }

    async fn text(&mut self, handle: ElementHandle) -> Result<String, DriverError> {
        let element = self
            .elements
            .get(&handle.0)
            .ok_or(DriverError::StaleHandle(handle))?;
        Ok(element.text.clone())
    }

    async fn close(&mut self) -> Result<(), DriverError> {
        self.current = None;
        Ok(())
    }
}

/// Generator that records prompts and replies with a canned completion.
#[derive(Debug, Default)]
pub struct MockGenerator {
    pub completion: String,
    pub fail: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn with_completion(completion: &str) -> Self {
        Self {
            completion: completion.to_string(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(GenerationError::Request("model offline".into()));
        }
        Ok(self.completion.clone())
    }
}
