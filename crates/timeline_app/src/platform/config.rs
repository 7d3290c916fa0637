use timeline_engine::FetchSettings;

use super::logging::LogDestination;
use super::ui::constants::ENDPOINTS;

/// Everything the binary needs to run. There is no file or environment
/// layer; the defaults are the program.
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    pub endpoints: Vec<String>,
    pub fetch: FetchSettings,
    pub log_destination: LogDestination,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            endpoints: ENDPOINTS.iter().map(|url| url.to_string()).collect(),
            fetch: FetchSettings::default(),
            log_destination: LogDestination::Terminal,
        }
    }
}
