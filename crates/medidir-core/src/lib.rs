pub mod analyzer;
pub mod app_config;
pub mod booking;
pub mod config;
pub mod directory;
pub mod doctors;

pub use analyzer::{analyze, can_analyze, matching_doctors, AnalysisInput, AnalysisResult};
pub use app_config::AppConfig;
pub use booking::{BookingError, BookingRequest, Confirmation, Gender, TIME_SLOTS};
pub use config::load_app_config;
pub use directory::{Department, SortBy};
pub use doctors::{
    load_seed, Doctor, NewDoctor, SeedFile, DEFAULT_AVAILABILITY, DEFAULT_EXPERIENCE_YEARS,
    DEFAULT_IMAGE_URL, DEFAULT_NAME, DEFAULT_SPECIALTY,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read seed file {path}: {source}")]
    SeedFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file: {0}")]
    SeedFileParse(#[from] serde_yaml::Error),

    #[error("seed validation failed: {0}")]
    Validation(String),
}
