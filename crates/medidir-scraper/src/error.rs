use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid profile URL format. Expected: https://www.{host}/doctor/{{slug}}")]
    InvalidProfileUrl { url: String, host: String },

    /// Non-2xx response or transport failure. The cause is logged where it
    /// happens; callers only ever see this one message.
    #[error(
        "unable to fetch doctor profile. This may be due to network restrictions or the \
         profile being private. Please use one of the example URLs or try again later."
    )]
    Unreachable { url: String, status: Option<u16> },

    #[error("invalid proxy endpoint \"{endpoint}\": {reason}")]
    InvalidProxyEndpoint { endpoint: String, reason: String },

    #[error("body fetched for {url} is not markup: {reason}")]
    Markup { url: String, reason: String },

    #[error("failed to scrape doctor profile: {inner}")]
    ScrapeFailed { inner: Box<ScraperError> },
}

impl ScraperError {
    /// Wrap an error raised while scraping so it surfaces with one
    /// descriptive prefix. Already-wrapped errors are returned unchanged.
    #[must_use]
    pub fn scrape_failed(self) -> Self {
        match self {
            wrapped @ ScraperError::ScrapeFailed { .. } => wrapped,
            other => ScraperError::ScrapeFailed {
                inner: Box::new(other),
            },
        }
    }
}
