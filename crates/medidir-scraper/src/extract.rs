//! Best-effort field extraction from a doctor profile page.
//!
//! Each field owns an ordered list of selector rules. Rules run in priority
//! order and the first one whose element yields acceptable text wins; when
//! none does the field falls back to its default. Missing fields are never
//! an error.

use std::sync::LazyLock;

use medidir_core::{
    DEFAULT_AVAILABILITY, DEFAULT_EXPERIENCE_YEARS, DEFAULT_IMAGE_URL, DEFAULT_NAME,
    DEFAULT_SPECIALTY,
};
use regex::Regex;

use crate::error::ScraperError;
use crate::markup::{Document, Selector};
use crate::types::{RawMarkup, ScrapedProfile};

/// Query hint appended to every accepted image URL so cards render at a
/// fixed size.
pub const IMAGE_SIZE_HINT: &str = "w=400&h=400&fit=crop";

/// Shorter `src` values are treated as placeholders, not real photos.
const MIN_IMAGE_SRC_LEN: usize = 10;

static NAME_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:dr\b\.?|doctor\b)\s*").expect("valid name prefix regex"));
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digits regex"));
static EXPERIENCE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)")
            .expect("valid years-of-experience regex"),
        Regex::new(r"(?i)experience[:\s]+(\d+)").expect("valid experience-label regex"),
    ]
});

/// Ordered lookup rules for one text field.
struct FieldRules {
    field: &'static str,
    selectors: &'static [Selector],
    /// Accepted text must be strictly longer than this many characters.
    /// Zero means "any non-empty text".
    min_len: usize,
}

const NAME: FieldRules = FieldRules {
    field: "name",
    selectors: &[
        Selector::ClassContains("doctor-name"),
        Selector::Class("doctor-name"),
        Selector::ClassContains("name"),
        Selector::Tag("h1"),
        Selector::Attr("itemprop", "name"),
    ],
    min_len: 0,
};

const SPECIALTY: FieldRules = FieldRules {
    field: "specialty",
    selectors: &[
        Selector::ClassContains("speciality"),
        Selector::Class("speciality"),
        Selector::ClassContains("specialty"),
        Selector::Class("specialty"),
        Selector::Attr("itemprop", "medicalSpecialty"),
    ],
    min_len: 0,
};

const SUB_SPECIALTY: FieldRules = FieldRules {
    field: "sub_specialty",
    selectors: &[
        Selector::ClassContains("sub-specialty"),
        Selector::Class("sub-specialty"),
        Selector::Class("sub-specialization"),
    ],
    min_len: 0,
};

const SUMMARY: FieldRules = FieldRules {
    field: "summary",
    selectors: &[
        Selector::ClassContains("summary"),
        Selector::Class("summary"),
        Selector::Class("doctor-summary"),
        Selector::ClassContains("brief"),
        Selector::Class("brief-description"),
        Selector::Attr("itemprop", "description"),
        Selector::Class("about-brief"),
        Selector::Attr("data-testid", "summary"),
    ],
    min_len: 20,
};

const OVERVIEW: FieldRules = FieldRules {
    field: "overview",
    selectors: &[
        Selector::ClassContains("doctor-overview"),
        Selector::Class("doctor-overview"),
        Selector::ClassContains("overview"),
        Selector::Class("overview"),
        Selector::ClassContains("about"),
    ],
    min_len: 50,
};

const EXPERTISE: FieldRules = FieldRules {
    field: "expertise",
    selectors: &[
        Selector::ClassContains("doctor-expertise"),
        Selector::Class("doctor-expertise"),
        Selector::ClassContains("expertise"),
        Selector::Class("expertise"),
    ],
    min_len: 0,
};

const QUALIFICATION: FieldRules = FieldRules {
    field: "qualification",
    selectors: &[
        Selector::ClassContains("doctor-qualification"),
        Selector::Class("doctor-qualification"),
        Selector::ClassContains("qualification"),
        Selector::Class("qualification"),
        Selector::ClassContains("education"),
    ],
    min_len: 0,
};

/// `.experience` is a subset of `[class*="experience"]`, so one rule covers both.
const EXPERIENCE_SELECTOR: Selector = Selector::ClassContains("experience");

const IMAGE_SELECTORS: [Selector; 5] = [
    Selector::Within(&Selector::Class("doctor-profile"), "img"),
    Selector::Within(&Selector::ClassContains("doctor-profile"), "img"),
    Selector::TagClassContains("img", "profile"),
    Selector::TagClassContains("img", "doctor"),
    Selector::Attr("itemprop", "image"),
];

/// Extract a normalized profile from fetched markup.
///
/// # Errors
///
/// Returns [`ScraperError::Markup`] only when the body is binary rather than
/// markup (it contains NUL characters). Fields that cannot be found fall
/// back to their defaults.
pub fn extract_profile(
    markup: &RawMarkup,
    source_url: &str,
) -> Result<ScrapedProfile, ScraperError> {
    let html = markup.text();
    if html.contains('\0') {
        return Err(ScraperError::Markup {
            url: source_url.to_owned(),
            reason: "body contains NUL characters".to_string(),
        });
    }
    let doc = Document::parse(html);

    let name = first_text(&doc, &NAME).map_or_else(|| DEFAULT_NAME.to_string(), normalize_name);
    let specialty = first_text(&doc, &SPECIALTY).unwrap_or_else(|| DEFAULT_SPECIALTY.to_string());

    let profile = ScrapedProfile {
        name,
        specialty,
        sub_specialty: first_text(&doc, &SUB_SPECIALTY),
        experience: extract_experience(&doc, html),
        availability: DEFAULT_AVAILABILITY
            .iter()
            .map(|d| (*d).to_string())
            .collect(),
        image: extract_image(&doc, source_url),
        source_url: source_url.to_owned(),
        summary: first_text(&doc, &SUMMARY),
        overview: first_text(&doc, &OVERVIEW),
        expertise: first_text(&doc, &EXPERTISE),
        qualification: first_text(&doc, &QUALIFICATION),
    };

    tracing::info!(
        url = source_url,
        name = %profile.name,
        specialty = %profile.specialty,
        experience = profile.experience,
        "extracted doctor profile"
    );

    Ok(profile)
}

fn first_text(doc: &Document, rules: &FieldRules) -> Option<String> {
    rules.selectors.iter().find_map(|selector| {
        let text = doc.text(doc.select_first(selector)?);
        let len = text.chars().count();
        if len == 0 || len <= rules.min_len {
            if len > 0 {
                tracing::debug!(
                    field = rules.field,
                    %selector,
                    len,
                    "match below length threshold; trying next rule"
                );
            }
            return None;
        }
        tracing::debug!(field = rules.field, %selector, "rule matched");
        Some(text)
    })
}

/// Collapse any leading `Dr`, `Dr.` or `Doctor` into a single `Dr. `.
fn normalize_name(raw: String) -> String {
    if NAME_PREFIX_RE.is_match(&raw) {
        NAME_PREFIX_RE.replace(&raw, "Dr. ").trim_end().to_string()
    } else {
        raw
    }
}

/// Years of experience from the dedicated element, else from a scan of the
/// whole page. The page scan only runs when no experience element with
/// text exists.
fn extract_experience(doc: &Document, html: &str) -> u32 {
    let element_text = doc
        .select_first(&EXPERIENCE_SELECTOR)
        .map(|el| doc.text(el))
        .filter(|t| !t.is_empty());

    let parsed = match element_text {
        Some(text) => DIGITS_RE
            .find(&text)
            .and_then(|m| m.as_str().parse::<u32>().ok()),
        None => EXPERIENCE_PATTERNS.iter().find_map(|re| {
            re.captures(html)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<u32>().ok())
        }),
    };

    parsed.unwrap_or(DEFAULT_EXPERIENCE_YEARS)
}

fn extract_image(doc: &Document, source_url: &str) -> String {
    IMAGE_SELECTORS
        .iter()
        .find_map(|selector| {
            let src = doc.select_first(selector)?.attr("src")?;
            if src.len() <= MIN_IMAGE_SRC_LEN {
                return None;
            }
            let absolute = absolutize_url(source_url, src)?;
            tracing::debug!(%selector, src = %absolute, "image rule matched");
            Some(with_size_hint(&absolute))
        })
        .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string())
}

fn absolutize_url(base_url: &str, candidate: &str) -> Option<String> {
    if candidate.starts_with("http") {
        return Some(candidate.to_owned());
    }
    let base = reqwest::Url::parse(base_url).ok()?;
    base.join(candidate).ok().map(|u| u.to_string())
}

fn with_size_hint(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{IMAGE_SIZE_HINT}")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
