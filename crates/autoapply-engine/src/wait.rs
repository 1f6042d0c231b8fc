//! Bounded polling for DOM conditions.
//!
//! Every wait in the pipeline goes through [`poll_for`], parameterized per
//! call site, so timeout behavior is explicit and testable instead of
//! hiding fixed sleeps in the control flow.

use autoapply_core::driver::{Driver, DriverError, ElementHandle, Selector};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Timeout and poll interval for one wait site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitParams {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for WaitParams {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            interval: Duration::from_millis(250),
        }
    }
}

impl WaitParams {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }
}

#[derive(Debug, Error)]
pub enum WaitError {
    #[error("Timed out after {waited:?} waiting for {selector}")]
    Timeout { selector: Selector, waited: Duration },

    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Poll until `selector` matches an element or `params.timeout` elapses.
///
/// The first poll happens immediately; an element already present never
/// pays the interval.
pub async fn poll_for<D: Driver + ?Sized>(
    driver: &mut D,
    selector: &Selector,
    params: WaitParams,
) -> Result<ElementHandle, WaitError> {
    let started = Instant::now();
    loop {
        if let Some(handle) = driver.find(selector).await? {
            return Ok(handle);
        }
        if started.elapsed() >= params.timeout {
            return Err(WaitError::Timeout {
                selector: selector.clone(),
                waited: started.elapsed(),
            });
        }
        tokio::time::sleep(params.interval).await;
    }
}

/// Poll until `selector` matches at least one element, returning all
/// matches in document order.
pub async fn poll_for_all<D: Driver + ?Sized>(
    driver: &mut D,
    selector: &Selector,
    params: WaitParams,
) -> Result<Vec<ElementHandle>, WaitError> {
    let started = Instant::now();
    loop {
        let handles = driver.find_all(selector).await?;
        if !handles.is_empty() {
            return Ok(handles);
        }
        if started.elapsed() >= params.timeout {
            return Err(WaitError::Timeout {
                selector: selector.clone(),
                waited: started.elapsed(),
            });
        }
        tokio::time::sleep(params.interval).await;
    }
}
