//! Directory browsing and maintenance commands.

use medidir_core::directory::{by_department, departments, search, sort_doctors, specialties};
use medidir_core::{Doctor, SortBy};
use medidir_scraper::demo_slugs;
use medidir_store::{DirectoryStore, KeyValueStorage};

const NAME_WIDTH: usize = 28;

/// Print doctors matching `term` and `specialty`, sorted by `sort`.
pub(crate) fn run_list<S: KeyValueStorage>(
    store: &DirectoryStore<S>,
    term: Option<&str>,
    specialty: Option<&str>,
    sort: SortBy,
) {
    let mut matches = search(store.doctors(), term.unwrap_or_default(), specialty);
    if matches.is_empty() {
        println!("{}", no_matches_message(store.doctors(), specialty));
        return;
    }
    sort_doctors(&mut matches, sort);
    print_doctors(&matches);
}

/// Print the department catalogue with live counts, or the doctors of one
/// department when `name` is given.
pub(crate) fn run_departments<S: KeyValueStorage>(store: &DirectoryStore<S>, name: Option<&str>) {
    if let Some(name) = name {
        let doctors = by_department(store.doctors(), name);
        if doctors.is_empty() {
            println!("no doctors in {name}");
        } else {
            print_doctors(&doctors);
        }
        return;
    }

    println!("{:<4}{:<22}DOCTORS", "ID", "DEPARTMENT");
    for department in departments(store.doctors()) {
        println!(
            "{:<4}{:<22}{}",
            department.id, department.name, department.doctor_count
        );
    }
}

/// Remove a doctor by id.
///
/// # Errors
///
/// Returns an error if no doctor has `id`, or if the directory cannot be
/// saved.
pub(crate) fn run_remove<S: KeyValueStorage>(
    store: &mut DirectoryStore<S>,
    id: &str,
) -> anyhow::Result<()> {
    let name = store
        .get(id)
        .map(|d| d.name.clone())
        .ok_or_else(|| anyhow::anyhow!("doctor '{id}' not found"))?;
    store.remove(id)?;
    println!("removed {name} ({id})");
    Ok(())
}

/// Print the profile URLs that resolve without a network request.
pub(crate) fn run_examples(profile_host: &str) {
    for slug in demo_slugs() {
        println!("https://www.{profile_host}/doctor/{slug}");
    }
}

fn print_doctors(doctors: &[&Doctor]) {
    println!(
        "{:<26}{:<NAME_WIDTH$}{:<20}{:<6}AVAILABLE",
        "ID", "NAME", "SPECIALTY", "YRS"
    );
    for doctor in doctors {
        println!(
            "{:<26}{:<NAME_WIDTH$}{:<20}{:<6}{}",
            doctor.id,
            truncate(&doctor.name, NAME_WIDTH - 2),
            doctor.specialty,
            doctor.experience,
            doctor.availability.join(", ")
        );
    }
}

/// When the requested specialty is not in the directory at all, name the
/// ones that are.
fn no_matches_message(doctors: &[Doctor], specialty: Option<&str>) -> String {
    let known = specialties(doctors);
    match specialty {
        Some(wanted) if !known.contains(&wanted) => format!(
            "no doctors with specialty '{wanted}'; available: {}",
            known.join(", ")
        ),
        _ => "no doctors found".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max - 3).collect::<String>())
    } else {
        s.to_owned()
    }
}
