//! Shapes flowing through the scrape pipeline.

use medidir_core::NewDoctor;
use serde::{Deserialize, Serialize};

/// Page body as fetched, decoded to text by the transport using the
/// response charset. Malformed sequences are replaced, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMarkup(String);

impl RawMarkup {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawMarkup {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RawMarkup {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A doctor profile normalized from an external page. Carries no id; the
/// directory store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedProfile {
    pub name: String,
    pub specialty: String,
    pub sub_specialty: Option<String>,
    pub experience: u32,
    pub availability: Vec<String>,
    pub image: String,
    pub source_url: String,
    pub summary: Option<String>,
    pub overview: Option<String>,
    pub expertise: Option<String>,
    pub qualification: Option<String>,
}

impl ScrapedProfile {
    /// Convert into a directory entry awaiting an id. Scraped doctors start
    /// unrated.
    #[must_use]
    pub fn into_new_doctor(self) -> NewDoctor {
        NewDoctor {
            name: self.name,
            specialty: self.specialty,
            sub_specialty: self.sub_specialty,
            experience: self.experience,
            rating: 0.0,
            availability: self.availability,
            image: self.image,
            summary: self.summary,
            overview: self.overview,
            expertise: self.expertise,
            qualification: self.qualification,
            profile_url: Some(self.source_url),
        }
    }
}

/// What the fetcher produced for a profile URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A bundled demo record; no network request was made.
    Canned(ScrapedProfile),
    /// Page markup retrieved through the proxy.
    Markup(RawMarkup),
}
