//! Doctor records shared by the scraper, the directory store, and the
//! booking flow.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_NAME: &str = "Unknown Doctor";
pub const DEFAULT_SPECIALTY: &str = "General Medicine";
pub const DEFAULT_EXPERIENCE_YEARS: u32 = 5;
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop";

/// Weekdays every scraped doctor is listed as available on. Profile pages
/// never carry schedules, so this is not extracted.
pub const DEFAULT_AVAILABILITY: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// A doctor in the directory.
///
/// Serialized in camelCase so stored data keeps the shape the directory has
/// always persisted under the `hospitalDoctors` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_specialty: Option<String>,
    /// Years of practice.
    pub experience: u32,
    #[serde(default)]
    pub rating: f32,
    pub availability: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

/// A doctor that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
    pub sub_specialty: Option<String>,
    pub experience: u32,
    pub rating: f32,
    pub availability: Vec<String>,
    pub image: String,
    pub summary: Option<String>,
    pub overview: Option<String>,
    pub expertise: Option<String>,
    pub qualification: Option<String>,
    pub profile_url: Option<String>,
}

impl NewDoctor {
    /// Attach an id, producing a directory entry.
    #[must_use]
    pub fn with_id(self, id: String) -> Doctor {
        Doctor {
            id,
            name: self.name,
            specialty: self.specialty,
            sub_specialty: self.sub_specialty,
            experience: self.experience,
            rating: self.rating,
            availability: self.availability,
            image: self.image,
            summary: self.summary,
            overview: self.overview,
            expertise: self.expertise,
            qualification: self.qualification,
            profile_url: self.profile_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub doctors: Vec<Doctor>,
}

/// Load and validate the bundled seed list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_seed(path: &Path) -> Result<SeedFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let seed: SeedFile = serde_yaml::from_str(&content)?;
    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &SeedFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for doctor in &seed.doctors {
        if doctor.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "doctor '{}' has an empty id",
                doctor.name
            )));
        }
        if doctor.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "doctor '{}' has an empty name",
                doctor.id
            )));
        }
        if doctor.specialty.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "doctor '{}' has an empty specialty",
                doctor.name
            )));
        }
        if !seen_ids.insert(doctor.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate doctor id: '{}'",
                doctor.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "doctors_test.rs"]
mod tests;
