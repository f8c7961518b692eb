//! Profile page retrieval through a cross-origin proxy.

mod demo;

use std::time::Duration;

use medidir_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::extract::extract_profile;
use crate::types::{FetchOutcome, RawMarkup, ScrapedProfile};
use crate::validate::{profile_slug, DEFAULT_PROFILE_HOST};

pub use demo::demo_slugs;

pub const DEFAULT_PROXY_ENDPOINT: &str = "https://api.allorigins.win/raw";
pub const DEFAULT_DEMO_LATENCY: Duration = Duration::from_millis(1500);

/// Fetches doctor profile pages.
///
/// Known demo slugs short-circuit to a canned record after a simulated
/// delay. Everything else is one GET to `<proxy>?url=<target>`; the request
/// is never retried and the result is never cached.
#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    client: Client,
    proxy: Url,
    profile_host: String,
    demo_latency: Duration,
}

impl ProfileFetcher {
    /// Creates a fetcher routing through `proxy_endpoint`.
    ///
    /// `timeout_secs` of `None` leaves reqwest's default (no overall
    /// timeout) in place.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidProxyEndpoint`] if `proxy_endpoint` is
    /// not an absolute URL, or [`ScraperError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        proxy_endpoint: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ScraperError> {
        let proxy = Url::parse(proxy_endpoint).map_err(|e| ScraperError::InvalidProxyEndpoint {
            endpoint: proxy_endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            proxy,
            profile_host: DEFAULT_PROFILE_HOST.to_owned(),
            demo_latency: DEFAULT_DEMO_LATENCY,
        })
    }

    /// Builds a fetcher from application config.
    ///
    /// # Errors
    ///
    /// See [`ProfileFetcher::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Ok(Self::new(
            &config.proxy_endpoint,
            &config.scraper_user_agent,
            config.scraper_timeout_secs,
        )?
        .with_profile_host(&config.profile_host)
        .with_demo_latency(Duration::from_millis(config.demo_latency_ms)))
    }

    /// Host named in the format error for URLs without a profile slug.
    #[must_use]
    pub fn with_profile_host(mut self, host: &str) -> Self {
        host.clone_into(&mut self.profile_host);
        self
    }

    #[must_use]
    pub fn with_demo_latency(mut self, latency: Duration) -> Self {
        self.demo_latency = latency;
        self
    }

    /// The proxy request URL for `target`, with `target` query-encoded.
    #[must_use]
    pub fn proxy_url(&self, target: &str) -> Url {
        let mut url = self.proxy.clone();
        url.query_pairs_mut().append_pair("url", target);
        url
    }

    /// Retrieves the profile at `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidProfileUrl`] when `url` has no `/doctor/<slug>` segment.
    /// - [`ScraperError::Unreachable`] on a non-2xx status or any transport failure.
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome, ScraperError> {
        let slug = profile_slug(url).ok_or_else(|| ScraperError::InvalidProfileUrl {
            url: url.to_owned(),
            host: self.profile_host.clone(),
        })?;

        if let Some(profile) = demo::lookup(slug) {
            tracing::info!(slug, "serving demo profile");
            tokio::time::sleep(self.demo_latency).await;
            return Ok(FetchOutcome::Canned(profile));
        }

        let request_url = self.proxy_url(url);
        tracing::debug!(target_url = url, proxy_url = %request_url, "fetching profile via proxy");

        let response = match self.client.get(request_url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url, error = %e, "profile request failed");
                return Err(unreachable(url, None));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "proxy returned non-success status");
            return Err(unreachable(url, Some(status.as_u16())));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url, error = %e, "failed reading profile body");
                return Err(unreachable(url, Some(status.as_u16())));
            }
        };

        tracing::debug!(url, bytes = body.len(), "profile markup received");
        Ok(FetchOutcome::Markup(RawMarkup::from(body)))
    }

    /// Fetches and extracts the profile at `url`.
    ///
    /// # Errors
    ///
    /// Every failure from [`ProfileFetcher::fetch`] or [`extract_profile`]
    /// surfaces wrapped as [`ScraperError::ScrapeFailed`].
    pub async fn scrape_profile(&self, url: &str) -> Result<ScrapedProfile, ScraperError> {
        match self.fetch(url).await.map_err(ScraperError::scrape_failed)? {
            FetchOutcome::Canned(profile) => Ok(profile),
            FetchOutcome::Markup(markup) => {
                extract_profile(&markup, url).map_err(ScraperError::scrape_failed)
            }
        }
    }
}

fn unreachable(url: &str, status: Option<u16>) -> ScraperError {
    ScraperError::Unreachable {
        url: url.to_owned(),
        status,
    }
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
