//! Appointment booking: form validation, slot catalogue, and confirmation.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::doctors::Doctor;

/// Bookable half-hour slots. There is no slot between 12:30 PM and 02:00 PM.
pub const TIME_SLOTS: [&str; 16] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM",
    "12:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
    "05:00 PM", "05:30 PM",
];

/// Number of days, starting today, a patient can pick from.
pub const BOOKING_WINDOW_DAYS: u64 = 30;

const MIN_PHONE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("unknown gender '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub patient_name: String,
    pub age: String,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
}

/// A single failed form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("booking is invalid: {}", describe(.0))]
    Invalid(Vec<FieldError>),
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.message, e.field))
        .collect::<Vec<_>>()
        .join("; ")
}

impl BookingRequest {
    /// Check every field and report all failures at once.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Invalid`] listing each field that failed.
    pub fn validate(&self) -> Result<(), BookingError> {
        let mut errors = Vec::new();

        if self.patient_name.trim().is_empty() {
            errors.push(FieldError {
                field: "patientName",
                message: "Name is required",
            });
        }
        if self.phone.trim().is_empty() || self.phone.chars().count() < MIN_PHONE_LEN {
            errors.push(FieldError {
                field: "phone",
                message: "Valid phone number is required",
            });
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            errors.push(FieldError {
                field: "email",
                message: "Valid email is required",
            });
        }
        if self.preferred_date.is_none() {
            errors.push(FieldError {
                field: "preferredDate",
                message: "Date is required",
            });
        }
        if self.preferred_time.as_deref().is_none_or(str::is_empty) {
            errors.push(FieldError {
                field: "preferredTime",
                message: "Time is required",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(BookingError::Invalid(errors))
        }
    }
}

/// The selectable dates: today plus the following days of the window.
#[must_use]
pub fn date_options(today: NaiveDate) -> Vec<NaiveDate> {
    (0..BOOKING_WINDOW_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub booking_id: String,
    pub request: BookingRequest,
    pub doctor: Option<Doctor>,
}

/// Validate `request` and issue a confirmation stamped from `now`.
///
/// # Errors
///
/// Returns [`BookingError::Invalid`] if the request fails validation.
pub fn confirm(
    request: BookingRequest,
    doctor: Option<Doctor>,
    now: DateTime<Utc>,
) -> Result<Confirmation, BookingError> {
    request.validate()?;
    let booking_id = booking_id(now);
    tracing::info!(
        booking_id = %booking_id,
        doctor_id = doctor.as_ref().map(|d| d.id.as_str()),
        "appointment confirmed"
    );
    Ok(Confirmation {
        booking_id,
        request,
        doctor,
    })
}

/// `APPT-` followed by the last eight digits of the Unix time in milliseconds.
fn booking_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(8)..];
    format!("APPT-{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> BookingRequest {
        BookingRequest {
            patient_name: "Asha Verma".to_string(),
            age: "34".to_string(),
            gender: Gender::Female,
            phone: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            preferred_date: NaiveDate::from_ymd_opt(2026, 10, 20),
            preferred_time: Some(TIME_SLOTS[0].to_string()),
            notes: None,
        }
    }

    fn failed_fields(request: &BookingRequest) -> Vec<&'static str> {
        match request.validate() {
            Ok(()) => Vec::new(),
            Err(BookingError::Invalid(errors)) => errors.iter().map(|e| e.field).collect(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let request = BookingRequest {
            patient_name: String::new(),
            age: String::new(),
            gender: Gender::default(),
            phone: String::new(),
            email: String::new(),
            preferred_date: None,
            preferred_time: None,
            notes: None,
        };
        assert_eq!(
            failed_fields(&request),
            [
                "patientName",
                "phone",
                "email",
                "preferredDate",
                "preferredTime"
            ]
        );
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut request = valid_request();
        request.phone = "12345".to_string();
        assert_eq!(failed_fields(&request), ["phone"]);
    }

    #[test]
    fn email_without_at_is_rejected() {
        let mut request = valid_request();
        request.email = "asha.example.com".to_string();
        assert_eq!(failed_fields(&request), ["email"]);
    }

    #[test]
    fn blank_time_is_rejected() {
        let mut request = valid_request();
        request.preferred_time = Some(String::new());
        assert_eq!(failed_fields(&request), ["preferredTime"]);
    }

    #[test]
    fn invalid_error_message_lists_fields() {
        let mut request = valid_request();
        request.patient_name = "   ".to_string();
        let err = request.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "booking is invalid: Name is required (patientName)"
        );
    }

    #[test]
    fn slots_skip_lunch() {
        assert_eq!(TIME_SLOTS.len(), 16);
        assert!(!TIME_SLOTS.contains(&"01:00 PM"));
        assert_eq!(TIME_SLOTS[7], "12:30 PM");
        assert_eq!(TIME_SLOTS[8], "02:00 PM");
    }

    #[test]
    fn date_options_cover_thirty_days_from_today() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 15).unwrap();
        let dates = date_options(today);
        assert_eq!(dates.len(), 30);
        assert_eq!(dates[0], today);
        assert_eq!(dates[29], NaiveDate::from_ymd_opt(2027, 1, 13).unwrap());
    }

    #[test]
    fn confirmation_id_uses_last_eight_millis_digits() {
        let now = DateTime::from_timestamp_millis(1_760_000_123_456).unwrap();
        let confirmation = confirm(valid_request(), None, now).unwrap();
        assert_eq!(confirmation.booking_id, "APPT-00123456");
    }

    #[test]
    fn confirm_rejects_invalid_request() {
        let mut request = valid_request();
        request.email = String::new();
        let now = DateTime::from_timestamp_millis(0).unwrap();
        assert!(confirm(request, None, now).is_err());
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert!("unknown".parse::<Gender>().is_err());
    }
}
