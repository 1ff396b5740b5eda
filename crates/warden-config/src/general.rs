//! General application configuration.

use serde::{Deserialize, Serialize};
use warden_core::enums::ReportingPeriod;

const fn default_period() -> ReportingPeriod {
    ReportingPeriod::Monthly
}

fn default_guard() -> String {
    "all".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Reporting period the dashboard opens with.
    #[serde(default = "default_period")]
    pub default_period: ReportingPeriod,

    /// Guard selection the dashboard opens with (`all` or a user id).
    #[serde(default = "default_guard")]
    pub default_guard: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_period: default_period(),
            default_guard: default_guard(),
        }
    }
}
