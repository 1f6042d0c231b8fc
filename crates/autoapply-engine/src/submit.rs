//! Per-job apply flow and the batch loop around it.
//!
//! Each listing runs the stage sequence Navigated → ActionLocated →
//! FieldsExtracted → Filled → Submitted. A failure while reaching a stage
//! terminates that job only; the batch loop records the outcome and moves
//! on, so one broken posting can never take down the run.

use crate::resolve::FieldAnswerResolver;
use crate::wait::{self, WaitParams};
use autoapply_core::collab::Generator;
use autoapply_core::driver::Driver;
use autoapply_core::model::{
    ApplicantProfile, ApplicationOutcome, ApplyStage, FormField, JobListing, StageFailure,
};
use autoapply_core::site::SiteAdapter;
use std::path::Path;
use tracing::{info, warn};

pub struct ApplicationSubmitter<'a, A: SiteAdapter + ?Sized, G: Generator + ?Sized> {
    adapter: &'a A,
    resolver: FieldAnswerResolver<'a, G>,
    wait: WaitParams,
    resume_path: &'a Path,
}

impl<'a, A: SiteAdapter + ?Sized, G: Generator + ?Sized> ApplicationSubmitter<'a, A, G> {
    pub fn new(adapter: &'a A, generator: &'a G, wait: WaitParams, resume_path: &'a Path) -> Self {
        Self {
            adapter,
            resolver: FieldAnswerResolver::new(generator),
            wait,
            resume_path,
        }
    }

    /// Apply to every listing in order, producing exactly one outcome per
    /// listing.
    pub async fn run<D: Driver + ?Sized>(
        &self,
        driver: &mut D,
        listings: &[JobListing],
        profile: &ApplicantProfile,
        context: &str,
    ) -> Vec<ApplicationOutcome> {
        let mut outcomes = Vec::with_capacity(listings.len());
        for listing in listings {
            info!(title = %listing.title, company = %listing.company, "Applying");
            match self.apply_one(driver, listing, profile, context).await {
                Ok(()) => {
                    info!(title = %listing.title, company = %listing.company, "Application submitted");
                    outcomes.push(ApplicationOutcome::submitted(listing.clone()));
                }
                Err(failure) => {
                    warn!(
                        title = %listing.title,
                        company = %listing.company,
                        stage = %failure.stage,
                        detail = %failure.detail,
                        "Application failed"
                    );
                    outcomes.push(ApplicationOutcome::failed(listing.clone(), failure));
                }
            }
        }
        outcomes
    }

    async fn apply_one<D: Driver + ?Sized>(
        &self,
        driver: &mut D,
        listing: &JobListing,
        profile: &ApplicantProfile,
        context: &str,
    ) -> Result<(), StageFailure> {
        driver
            .navigate(&listing.url)
            .await
            .map_err(|e| StageFailure::new(ApplyStage::Navigated, e.to_string()))?;

        let apply = wait::poll_for(driver, &self.adapter.apply_action(), self.wait)
            .await
            .map_err(|e| StageFailure::new(ApplyStage::ActionLocated, e.to_string()))?;
        driver
            .click(apply)
            .await
            .map_err(|e| StageFailure::new(ApplyStage::ActionLocated, e.to_string()))?;

        let fields = self
            .extract_fields(driver)
            .await
            .map_err(|e| StageFailure::new(ApplyStage::FieldsExtracted, e))?;

        for field in fields {
            let element = field.element;
            let resolution = self
                .resolver
                .resolve(field, profile, context)
                .await
                .map_err(|e| StageFailure::new(ApplyStage::Filled, e.to_string()))?;
            driver
                .type_text(element, &resolution.answer)
                .await
                .map_err(|e| StageFailure::new(ApplyStage::Filled, e.to_string()))?;
        }

        let upload = driver
            .find(&self.adapter.upload_control())
            .await
            .map_err(|e| StageFailure::new(ApplyStage::Submitted, e.to_string()))?
            .ok_or_else(|| {
                StageFailure::new(ApplyStage::Submitted, "resume upload control not found")
            })?;
        driver
            .type_text(upload, &self.resume_path.to_string_lossy())
            .await
            .map_err(|e| StageFailure::new(ApplyStage::Submitted, e.to_string()))?;

        let submit = driver
            .find(&self.adapter.submit_control())
            .await
            .map_err(|e| StageFailure::new(ApplyStage::Submitted, e.to_string()))?
            .ok_or_else(|| StageFailure::new(ApplyStage::Submitted, "submit control not found"))?;
        driver
            .click(submit)
            .await
            .map_err(|e| StageFailure::new(ApplyStage::Submitted, e.to_string()))?;

        Ok(())
    }

    /// Wait for the apply form to render, then enumerate its input fields
    /// with their question labels.
    async fn extract_fields<D: Driver + ?Sized>(
        &self,
        driver: &mut D,
    ) -> Result<Vec<FormField>, String> {
        let handles = wait::poll_for_all(driver, &self.adapter.form_fields(), self.wait)
            .await
            .map_err(|e| e.to_string())?;

        let label_attr = self.adapter.field_label_attribute();
        let mut fields = Vec::with_capacity(handles.len());
        for handle in handles {
            let label = driver
                .attribute(handle, label_attr)
                .await
                .map_err(|e| e.to_string())?
                .unwrap_or_default();
            fields.push(FormField {
                label,
                element: handle,
            });
        }
        Ok(fields)
    }
}
