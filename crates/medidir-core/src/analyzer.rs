//! Keyword-based symptom analyzer.
//!
//! Maps either a set of selected symptoms or a free-text description to a
//! recommended specialty with a confidence score. This is a static lookup,
//! not a diagnosis.

use std::time::Duration;

use serde::Serialize;

use crate::doctors::{Doctor, DEFAULT_SPECIALTY};

const BASELINE_CONFIDENCE: f64 = 0.85;
const MAX_SYMPTOM_CONFIDENCE: f64 = 0.95;

/// Minimum trimmed length of a free-text description before analysis runs.
const MIN_TEXT_LEN: usize = 10;

/// Selectable symptoms: `(symptom, specialty, sub-specialty)`.
pub const SYMPTOMS: [(&str, &str, Option<&str>); 16] = [
    ("Chest pain", "Cardiology", None),
    ("Palpitations", "Cardiology", Some("Electrophysiology")),
    ("Shortness of breath", "Pulmonology", None),
    ("Persistent cough", "Pulmonology", None),
    ("Headache", "Neurology", None),
    ("Dizziness", "Neurology", None),
    ("Numbness or tingling", "Neurology", Some("Neuromuscular Medicine")),
    ("Joint pain", "Orthopedics", None),
    ("Back pain", "Orthopedics", Some("Spine Surgery")),
    ("Sports injury", "Orthopedics", Some("Sports Medicine")),
    ("Skin rash", "Dermatology", None),
    ("Acne", "Dermatology", Some("Cosmetic Dermatology")),
    ("Stomach pain", "Gastroenterology", None),
    ("Acid reflux", "Gastroenterology", None),
    ("Blurred vision", "Ophthalmology", None),
    ("Fever", "General Medicine", None),
];

/// Free-text keyword cascade: the first group with a hit wins.
const TEXT_RULES: [(&[&str], &str, f64); 5] = [
    (&["heart", "chest pain", "cardiac"], "Cardiology", 0.9),
    (&["skin", "rash", "acne"], "Dermatology", 0.88),
    (&["bone", "joint", "fracture"], "Orthopedics", 0.92),
    (
        &["stomach", "digestive", "abdominal"],
        "Gastroenterology",
        0.87,
    ),
    (&["eye", "vision", "sight"], "Ophthalmology", 0.91),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Symptoms(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub specialty: String,
    pub sub_specialty: Option<String>,
    pub confidence: f64,
}

impl AnalysisResult {
    fn baseline() -> Self {
        Self {
            specialty: DEFAULT_SPECIALTY.to_string(),
            sub_specialty: None,
            confidence: BASELINE_CONFIDENCE,
        }
    }
}

/// Whether `input` carries enough signal to analyze.
#[must_use]
pub fn can_analyze(input: &AnalysisInput) -> bool {
    match input {
        AnalysisInput::Symptoms(selected) => !selected.is_empty(),
        AnalysisInput::Text(text) => text.trim().chars().count() > MIN_TEXT_LEN,
    }
}

/// Run the analysis after the simulated processing `delay`.
pub async fn analyze(input: &AnalysisInput, delay: Duration) -> AnalysisResult {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let result = analyze_now(input);
    tracing::debug!(
        specialty = %result.specialty,
        confidence = result.confidence,
        "symptom analysis complete"
    );
    result
}

/// The analysis itself, without the simulated delay.
#[must_use]
pub fn analyze_now(input: &AnalysisInput) -> AnalysisResult {
    match input {
        AnalysisInput::Symptoms(selected) => analyze_symptoms(selected),
        AnalysisInput::Text(text) => analyze_text(text),
    }
}

fn analyze_symptoms(selected: &[String]) -> AnalysisResult {
    let mut result = AnalysisResult::baseline();
    // (specialty, votes) in the order each specialty was first reached.
    let mut tally: Vec<(&str, u32)> = Vec::new();

    for symptom in selected {
        let Some((_, specialty, sub)) = SYMPTOMS
            .iter()
            .find(|(s, _, _)| *s == symptom.as_str())
        else {
            continue;
        };
        match tally.iter_mut().find(|(s, _)| s == specialty) {
            Some((_, votes)) => *votes += 1,
            None => tally.push((*specialty, 1)),
        }
        if let Some(sub) = sub {
            result.sub_specialty = Some((*sub).to_string());
        }
    }

    // Stable sort keeps the earliest specialty on a tie.
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some((specialty, votes)) = tally.first() {
        result.specialty = (*specialty).to_string();
        result.confidence = (0.7 + f64::from(*votes) * 0.1).min(MAX_SYMPTOM_CONFIDENCE);
    }

    result
}

fn analyze_text(text: &str) -> AnalysisResult {
    let lower = text.to_lowercase();
    TEXT_RULES
        .iter()
        .find(|(keywords, _, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or_else(AnalysisResult::baseline, |(_, specialty, confidence)| {
            AnalysisResult {
                specialty: (*specialty).to_string(),
                sub_specialty: None,
                confidence: *confidence,
            }
        })
}

/// Doctors matching an analysis: same specialty, or the same sub-specialty
/// when both sides carry one.
#[must_use]
pub fn matching_doctors<'a>(doctors: &'a [Doctor], result: &AnalysisResult) -> Vec<&'a Doctor> {
    doctors
        .iter()
        .filter(|d| {
            d.specialty == result.specialty
                || matches!(
                    (&d.sub_specialty, &result.sub_specialty),
                    (Some(a), Some(b)) if a == b
                )
        })
        .collect()
}
