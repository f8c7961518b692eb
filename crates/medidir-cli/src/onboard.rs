//! Admin onboarding: profile URL in, directory entry out.
//!
//! Validate, scrape, convert, add. Every failure surfaces as a single
//! message and nothing is retried.

use std::sync::atomic::{AtomicBool, Ordering};

use medidir_core::Doctor;
use medidir_scraper::{ProfileFetcher, ProfileUrlValidator, ScraperError};
use medidir_store::{DirectoryStore, KeyValueStorage, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum OnboardError {
    #[error("Invalid LinqMD URL format. Expected: https://www.{host}/doctor/{{slug}}")]
    InvalidUrl { host: String },

    #[error("another doctor is already being added; wait for it to finish")]
    Busy,

    #[error(transparent)]
    Scrape(#[from] ScraperError),

    #[error("failed to save doctor: {0}")]
    Store(#[from] StoreError),
}

/// A doctor added by onboarding, with the confirmation line shown to the
/// admin.
#[derive(Debug)]
pub(crate) struct Onboarded {
    pub doctor: Doctor,
    pub message: String,
}

pub(crate) struct Onboarder {
    validator: ProfileUrlValidator,
    fetcher: ProfileFetcher,
    busy: AtomicBool,
}

/// Clears the busy flag when the submission finishes, however it ends.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Onboarder {
    pub(crate) fn new(validator: ProfileUrlValidator, fetcher: ProfileFetcher) -> Self {
        Self {
            validator,
            fetcher,
            busy: AtomicBool::new(false),
        }
    }

    /// Scrape the profile at `url` and add it to `store`.
    ///
    /// # Errors
    ///
    /// - [`OnboardError::InvalidUrl`] before any fetch when `url` is malformed.
    /// - [`OnboardError::Busy`] while another submission is in flight.
    /// - [`OnboardError::Scrape`] when the profile cannot be fetched or decoded.
    /// - [`OnboardError::Store`] when the updated directory cannot be saved.
    pub(crate) async fn onboard<S: KeyValueStorage>(
        &self,
        store: &mut DirectoryStore<S>,
        url: &str,
    ) -> Result<Onboarded, OnboardError> {
        if !self.validator.is_valid(url) {
            tracing::debug!(url, "rejected malformed profile URL");
            return Err(OnboardError::InvalidUrl {
                host: self.validator.host().to_owned(),
            });
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!(url, "rejected onboarding submission while busy");
            return Err(OnboardError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        let profile = self.fetcher.scrape_profile(url).await?;
        let message = success_message(&profile.name, profile.summary.as_deref());
        let doctor = store.add(profile.into_new_doctor())?;

        Ok(Onboarded { doctor, message })
    }
}

fn success_message(name: &str, summary: Option<&str>) -> String {
    match summary {
        Some(summary) => format!("Successfully added {name} to the system! Summary: {summary}"),
        None => format!("Successfully added {name} to the system!"),
    }
}

#[cfg(test)]
#[path = "onboard_test.rs"]
mod tests;
