//! Job search: drive the site's search surface and scrape the result rows.

use crate::wait::{self, WaitError, WaitParams};
use autoapply_core::driver::{Driver, DriverError, ElementHandle};
use autoapply_core::model::JobListing;
use autoapply_core::site::SiteAdapter;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SearchError {
    /// The search control or results never appeared; fatal to the run.
    #[error("Search timed out: {0}")]
    Timeout(#[source] WaitError),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl From<WaitError> for SearchError {
    fn from(err: WaitError) -> Self {
        match err {
            WaitError::Timeout { .. } => SearchError::Timeout(err),
            WaitError::Driver(e) => SearchError::Driver(e),
        }
    }
}

/// Scrapes an ordered list of job listings for a query.
///
/// Holds no state between runs: searching an unchanged page twice yields
/// the same ordered listings.
pub struct JobSearcher<'a, A: SiteAdapter> {
    adapter: &'a A,
    wait: WaitParams,
}

impl<'a, A: SiteAdapter> JobSearcher<'a, A> {
    pub fn new(adapter: &'a A, wait: WaitParams) -> Self {
        Self { adapter, wait }
    }

    /// Navigate to the search surface, submit `query`, and extract one
    /// listing per result row. Rows missing any of title, company,
    /// location, or link are skipped rather than aborting the search.
    pub async fn search<D: Driver + ?Sized>(
        &self,
        driver: &mut D,
        site_url: &str,
        query: &str,
    ) -> Result<Vec<JobListing>, SearchError> {
        let url = self.adapter.search_url(site_url);
        info!(site = self.adapter.name(), %url, "Navigating to search surface");
        driver.navigate(&url).await?;

        let search_box = wait::poll_for(driver, &self.adapter.search_box(), self.wait).await?;
        debug!(%query, "Submitting search query");
        driver.type_text(search_box, query).await?;
        // Trailing newline submits the query (send_keys Enter semantics).
        driver.type_text(search_box, "\n").await?;

        let rows = wait::poll_for_all(driver, &self.adapter.listing_rows(), self.wait).await?;
        info!(count = rows.len(), "Result rows rendered");

        let mut listings = Vec::new();
        for row in rows {
            match self.extract_row(driver, row).await? {
                Some(listing) => listings.push(listing),
                None => warn!("Skipping result row with missing fields"),
            }
        }
        Ok(listings)
    }

    /// Pull title, company, location, and the detail link out of one row.
    /// Returns `Ok(None)` when any of the four is absent.
    async fn extract_row<D: Driver + ?Sized>(
        &self,
        driver: &mut D,
        row: ElementHandle,
    ) -> Result<Option<JobListing>, DriverError> {
        let title = match driver.find_within(row, &self.adapter.listing_title()).await? {
            Some(el) => driver.text(el).await?,
            None => return Ok(None),
        };
        let company = match driver
            .find_within(row, &self.adapter.listing_company())
            .await?
        {
            Some(el) => driver.text(el).await?,
            None => return Ok(None),
        };
        let location = match driver
            .find_within(row, &self.adapter.listing_location())
            .await?
        {
            Some(el) => driver.text(el).await?,
            None => return Ok(None),
        };
        let url = match driver.find_within(row, &self.adapter.listing_link()).await? {
            Some(el) => match driver.attribute(el, "href").await? {
                Some(href) => href,
                None => return Ok(None),
            },
            None => return Ok(None),
        };

        Ok(Some(JobListing {
            title,
            company,
            location,
            url,
        }))
    }
}
