//! Profile URL validation.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

pub const DEFAULT_PROFILE_HOST: &str = "linqmd.com";

static DEFAULT_VALIDATOR: LazyLock<ProfileUrlValidator> =
    LazyLock::new(|| ProfileUrlValidator::new(DEFAULT_PROFILE_HOST));

/// Checks candidate strings against
/// `^https?://(www\.)?<host>/doctor/[a-z0-9-]+$`, case-insensitively.
#[derive(Debug, Clone)]
pub struct ProfileUrlValidator {
    host: String,
    pattern: Regex,
}

impl ProfileUrlValidator {
    #[must_use]
    pub fn new(host: &str) -> Self {
        let pattern = RegexBuilder::new(&format!(
            r"^https?://(www\.)?{}/doctor/[a-z0-9-]+$",
            regex::escape(host)
        ))
        .case_insensitive(true)
        .build()
        .expect("escaped host always yields a valid regex");
        Self {
            host: host.to_owned(),
            pattern,
        }
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}

impl Default for ProfileUrlValidator {
    fn default() -> Self {
        DEFAULT_VALIDATOR.clone()
    }
}

/// Validate against the default profile host.
#[must_use]
pub fn is_valid_profile_url(candidate: &str) -> bool {
    DEFAULT_VALIDATOR.is_valid(candidate)
}

/// The path segment after `/doctor/`, if present and non-empty.
#[must_use]
pub fn profile_slug(url: &str) -> Option<&str> {
    url.split_once("/doctor/")
        .map(|(_, slug)| slug)
        .filter(|slug| !slug.is_empty())
}
