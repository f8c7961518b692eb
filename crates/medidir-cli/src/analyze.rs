//! Symptom analysis command.

use std::time::Duration;

use medidir_core::analyzer::SYMPTOMS;
use medidir_core::{analyze, can_analyze, matching_doctors, AnalysisInput};
use medidir_store::{DirectoryStore, KeyValueStorage};

/// Build the analyzer input from CLI arguments.
///
/// # Errors
///
/// Returns an error naming the accepted symptoms if any symptom is not in
/// the analyzer's table, or if the input is too thin to analyze.
pub(crate) fn analysis_input(
    symptoms: Vec<String>,
    text: Option<String>,
) -> anyhow::Result<AnalysisInput> {
    let input = match text {
        Some(text) => AnalysisInput::Text(text),
        None => {
            if let Some(unknown) = symptoms
                .iter()
                .find(|s| !SYMPTOMS.iter().any(|(known, _, _)| *known == s.as_str()))
            {
                let known: Vec<&str> = SYMPTOMS.iter().map(|(s, _, _)| *s).collect();
                anyhow::bail!(
                    "unknown symptom '{unknown}'; choose from: {}",
                    known.join(", ")
                );
            }
            AnalysisInput::Symptoms(symptoms)
        }
    };

    if !can_analyze(&input) {
        anyhow::bail!(
            "not enough to analyze: select at least one symptom or describe them in more than \
             ten characters"
        );
    }
    Ok(input)
}

/// Analyze `input` and list the doctors who match the recommendation.
pub(crate) async fn run_analyze<S: KeyValueStorage>(
    store: &DirectoryStore<S>,
    input: &AnalysisInput,
    delay: Duration,
) {
    println!("analyzing...");
    let result = analyze(input, delay).await;

    match &result.sub_specialty {
        Some(sub) => println!("Recommended: {} ({sub})", result.specialty),
        None => println!("Recommended: {}", result.specialty),
    }
    println!("Confidence: {:.0}%", result.confidence * 100.0);

    let doctors = matching_doctors(store.doctors(), &result);
    if doctors.is_empty() {
        println!("no matching doctors in the directory");
        return;
    }
    println!();
    for doctor in doctors {
        println!(
            "{:<26}{} - {}, {} yrs",
            doctor.id, doctor.name, doctor.specialty, doctor.experience
        );
    }
}
