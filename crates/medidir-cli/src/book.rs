//! Appointment booking command.

use chrono::{NaiveDate, Utc};
use clap::Args;
use medidir_core::booking::{confirm, date_options, Confirmation};
use medidir_core::{BookingRequest, Gender, TIME_SLOTS};
use medidir_store::{DirectoryStore, KeyValueStorage};

/// Patient details for `book`. Every field is optional on the command line
/// so that validation can report all problems at once.
#[derive(Debug, Args)]
pub struct BookArgs {
    /// Id of the doctor to book with
    #[arg(long)]
    pub doctor: String,
    /// Patient's full name
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub age: String,
    /// male, female or other
    #[arg(long, default_value = "male")]
    pub gender: Gender,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    /// Preferred date (YYYY-MM-DD), within the next 30 days
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Preferred slot, e.g. "09:30 AM"
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Print the confirmation as JSON
    #[arg(long)]
    pub json: bool,
}

impl BookArgs {
    fn into_request(self) -> BookingRequest {
        BookingRequest {
            patient_name: self.name,
            age: self.age,
            gender: self.gender,
            phone: self.phone,
            email: self.email,
            preferred_date: self.date,
            preferred_time: self.time,
            notes: self.notes,
        }
    }
}

/// Book an appointment with a doctor from the directory.
///
/// # Errors
///
/// Returns an error if the doctor does not exist, the date or slot is not
/// offered, or the request fails validation.
pub(crate) fn run_book<S: KeyValueStorage>(
    store: &DirectoryStore<S>,
    args: BookArgs,
) -> anyhow::Result<()> {
    let doctor = store
        .get(&args.doctor)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("doctor '{}' not found", args.doctor))?;
    check_offered(args.date, args.time.as_deref(), Utc::now().date_naive())?;

    let json = args.json;
    let confirmation = confirm(args.into_request(), Some(doctor), Utc::now())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&confirmation)?);
    } else {
        print_confirmation(&confirmation);
    }
    Ok(())
}

/// Reject dates outside the booking window and times outside the slot
/// list. Missing values are left for request validation to report.
fn check_offered(
    date: Option<NaiveDate>,
    time: Option<&str>,
    today: NaiveDate,
) -> anyhow::Result<()> {
    if let Some(date) = date {
        if !date_options(today).contains(&date) {
            anyhow::bail!("date {date} is not bookable; choose a date within the next 30 days");
        }
    }
    if let Some(time) = time.filter(|t| !t.is_empty()) {
        if !TIME_SLOTS.contains(&time) {
            anyhow::bail!(
                "time '{time}' is not an available slot; choose from: {}",
                TIME_SLOTS.join(", ")
            );
        }
    }
    Ok(())
}

fn print_confirmation(confirmation: &Confirmation) {
    let request = &confirmation.request;
    println!("Appointment confirmed: {}", confirmation.booking_id);
    if let Some(doctor) = &confirmation.doctor {
        println!("Doctor:  {} ({})", doctor.name, doctor.specialty);
    }
    println!("Patient: {}", request.patient_name);
    if let (Some(date), Some(time)) = (request.preferred_date, &request.preferred_time) {
        println!("When:    {} at {time}", date.format("%A, %B %-d, %Y"));
    }
    println!("Contact: {} / {}", request.phone, request.email);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn offered_date_and_slot_pass() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 30).unwrap();
        assert!(check_offered(Some(date), Some("09:00 AM"), today()).is_ok());
    }

    #[test]
    fn date_past_window_is_rejected() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        assert!(check_offered(Some(date), None, today()).is_err());
    }

    #[test]
    fn past_date_is_rejected() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert!(check_offered(Some(date), None, today()).is_err());
    }

    #[test]
    fn lunch_slot_is_rejected() {
        let err = check_offered(None, Some("01:00 PM"), today()).unwrap_err();
        assert!(err.to_string().contains("not an available slot"));
    }

    #[test]
    fn missing_values_are_left_to_validation() {
        assert!(check_offered(None, None, today()).is_ok());
        assert!(check_offered(None, Some(""), today()).is_ok());
    }
}
