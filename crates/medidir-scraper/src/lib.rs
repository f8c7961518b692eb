pub mod error;
pub mod extract;
pub mod fetch;
pub mod markup;
pub mod types;
pub mod validate;

pub use error::ScraperError;
pub use extract::extract_profile;
pub use fetch::{demo_slugs, ProfileFetcher};
pub use types::{FetchOutcome, RawMarkup, ScrapedProfile};
pub use validate::{is_valid_profile_url, profile_slug, ProfileUrlValidator};
