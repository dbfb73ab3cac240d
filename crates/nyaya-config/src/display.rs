//! Dashboard display settings.

use nyaya_core::enums::NumberGrouping;
use serde::{Deserialize, Serialize};

const fn default_recent_years() -> usize {
    10
}

const fn default_top_states() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Number of most recent years in the IPC bar chart.
    #[serde(default = "default_recent_years")]
    pub recent_years: usize,

    /// Number of states in the women-crime ranking.
    #[serde(default = "default_top_states")]
    pub top_states: usize,

    #[serde(default)]
    pub number_grouping: NumberGrouping,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_years: default_recent_years(),
            top_states: default_top_states(),
            number_grouping: NumberGrouping::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DisplayConfig::default();
        assert_eq!(config.recent_years, 10);
        assert_eq!(config.top_states, 3);
        assert_eq!(config.number_grouping, NumberGrouping::Western);
    }
}
