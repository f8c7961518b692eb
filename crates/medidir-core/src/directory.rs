//! Read-side queries over the doctor directory: search, sorting, and the
//! department catalogue.

use serde::Serialize;

use crate::doctors::Doctor;

/// Every department the hospital advertises, in display order.
pub const DEPARTMENTS: [&str; 20] = [
    "Cardiology",
    "Neurology",
    "Orthopedics",
    "Ophthalmology",
    "General Medicine",
    "Pediatrics",
    "ENT",
    "Dermatology",
    "Gastroenterology",
    "Pulmonology",
    "Nephrology",
    "Urology",
    "Endocrinology",
    "Rheumatology",
    "Psychiatry",
    "Oncology",
    "Radiology",
    "Anesthesiology",
    "Emergency Medicine",
    "Obstetrics & Gynecology",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub doctor_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    Name,
    #[default]
    Experience,
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortBy::Name),
            "experience" => Ok(SortBy::Experience),
            other => Err(format!("unknown sort key '{other}'; use name or experience")),
        }
    }
}

/// Filter doctors by a free-text term and an optional exact specialty.
///
/// The term matches case-insensitively against name or specialty; an empty
/// term matches everyone. `specialty = None` means "all specialties".
#[must_use]
pub fn search<'a>(doctors: &'a [Doctor], term: &str, specialty: Option<&str>) -> Vec<&'a Doctor> {
    let term = term.to_lowercase();
    doctors
        .iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&term) || d.specialty.to_lowercase().contains(&term)
        })
        .filter(|d| specialty.is_none_or(|s| d.specialty == s))
        .collect()
}

/// Distinct specialties in the order they first appear.
#[must_use]
pub fn specialties(doctors: &[Doctor]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for doctor in doctors {
        if !seen.contains(&doctor.specialty.as_str()) {
            seen.push(doctor.specialty.as_str());
        }
    }
    seen
}

/// Sort in place: names ascending, or most experienced first. Ties keep
/// their directory order.
pub fn sort_doctors(doctors: &mut [&Doctor], by: SortBy) {
    match by {
        SortBy::Name => doctors.sort_by(|a, b| a.name.cmp(&b.name)),
        SortBy::Experience => doctors.sort_by(|a, b| b.experience.cmp(&a.experience)),
    }
}

/// The department catalogue with a live doctor count for each entry.
#[must_use]
pub fn departments(doctors: &[Doctor]) -> Vec<Department> {
    DEPARTMENTS
        .iter()
        .enumerate()
        .map(|(idx, name)| Department {
            id: (idx + 1).to_string(),
            name: (*name).to_string(),
            doctor_count: doctors.iter().filter(|d| d.specialty == *name).count(),
        })
        .collect()
}

/// Doctors whose specialty is exactly `department`.
#[must_use]
pub fn by_department<'a>(doctors: &'a [Doctor], department: &str) -> Vec<&'a Doctor> {
    doctors.iter().filter(|d| d.specialty == department).collect()
}
