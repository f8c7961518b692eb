use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Directory holding one JSON file per storage key.
    pub data_dir: PathBuf,
    /// Bundled seed list used when no (or too little) stored data exists.
    pub seed_path: PathBuf,
    /// Host accepted by the profile URL validator, e.g. `"linqmd.com"`.
    pub profile_host: String,
    /// Cross-origin proxy the fetcher routes profile requests through.
    pub proxy_endpoint: String,
    pub scraper_user_agent: String,
    /// `None` leaves the transport's own timeout behavior in place.
    pub scraper_timeout_secs: Option<u64>,
    pub demo_latency_ms: u64,
    pub analysis_delay_ms: u64,
}
