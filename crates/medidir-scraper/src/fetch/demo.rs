//! Bundled demo profiles served without touching the network.

use crate::types::ScrapedProfile;

const DEMO_SLUGS: [&str; 2] = ["murali-mohan-s", "lavanya"];

/// Slugs that resolve to a canned profile.
#[must_use]
pub fn demo_slugs() -> &'static [&'static str] {
    &DEMO_SLUGS
}

pub(super) fn lookup(slug: &str) -> Option<ScrapedProfile> {
    match slug {
        "murali-mohan-s" => Some(murali_mohan_s()),
        "lavanya" => Some(lavanya()),
        _ => None,
    }
}

fn days(list: &[&str]) -> Vec<String> {
    list.iter().map(|d| (*d).to_string()).collect()
}

fn murali_mohan_s() -> ScrapedProfile {
    ScrapedProfile {
        name: "Dr. Murali Mohan S".to_string(),
        specialty: "Cardiology".to_string(),
        sub_specialty: Some("Interventional Cardiology".to_string()),
        experience: 18,
        availability: days(&["Mon", "Tue", "Wed", "Thu", "Fri"]),
        image: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop"
            .to_string(),
        source_url: "https://www.linqmd.com/doctor/murali-mohan-s".to_string(),
        summary: Some(
            "Experienced cardiologist specializing in interventional procedures".to_string(),
        ),
        overview: Some(
            "Dr. Murali Mohan S is a renowned cardiologist with extensive experience in \
             interventional cardiology. He specializes in complex cardiac procedures and has \
             helped numerous patients with heart conditions."
                .to_string(),
        ),
        expertise: Some(
            "Angioplasty, Cardiac Catheterization, Stent Placement, Heart Disease Management"
                .to_string(),
        ),
        qualification: Some("MBBS, MD (Internal Medicine), DM (Cardiology)".to_string()),
    }
}

fn lavanya() -> ScrapedProfile {
    ScrapedProfile {
        name: "Dr. Lavanya".to_string(),
        specialty: "Dermatology".to_string(),
        sub_specialty: Some("Cosmetic Dermatology".to_string()),
        experience: 12,
        availability: days(&["Mon", "Wed", "Fri", "Sat"]),
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&fit=crop"
            .to_string(),
        source_url: "https://www.linqmd.com/doctor/lavanya".to_string(),
        summary: Some(
            "Board-certified dermatologist with expertise in cosmetic procedures".to_string(),
        ),
        overview: Some(
            "Dr. Lavanya is a skilled dermatologist who combines medical expertise with \
             aesthetic sensibility. She provides comprehensive skin care solutions and cosmetic \
             treatments tailored to each patient."
                .to_string(),
        ),
        expertise: Some(
            "Laser Treatments, Anti-Aging Procedures, Acne Treatment, Skin Rejuvenation"
                .to_string(),
        ),
        qualification: Some(
            "MBBS, MD (Dermatology), Fellowship in Cosmetic Dermatology".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_slug_has_a_record() {
        for slug in demo_slugs() {
            let profile = lookup(slug).expect("listed slug resolves");
            assert!(profile.source_url.ends_with(slug));
        }
    }

    #[test]
    fn unknown_slug_misses() {
        assert!(lookup("unknown-person").is_none());
        assert!(lookup("Lavanya").is_none());
    }

    #[test]
    fn canned_records_carry_their_own_availability() {
        let lavanya = lookup("lavanya").unwrap();
        assert_eq!(lavanya.availability, ["Mon", "Wed", "Fri", "Sat"]);
        assert_eq!(lavanya.experience, 12);
    }
}
