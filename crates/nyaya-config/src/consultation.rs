//! Lawyer consultation settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_lawyer_phone() -> String {
    "+911234567890".to_string()
}

fn default_whatsapp_link() -> String {
    "https://wa.me/911234567890".to_string()
}

const fn default_cost() -> u32 {
    500
}

const fn default_connect_delay_ms() -> u64 {
    800
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsultationConfig {
    /// Number dialled for `call` requests.
    #[serde(default = "default_lawyer_phone")]
    pub lawyer_phone: String,

    /// Messaging deep link opened for `chat` requests.
    #[serde(default = "default_whatsapp_link")]
    pub whatsapp_link: String,

    /// Consultation fee sent with every request.
    #[serde(default = "default_cost")]
    pub cost: u32,

    /// Pause between the success notice and the connection hand-off.
    #[serde(default = "default_connect_delay_ms")]
    pub connect_delay_ms: u64,
}

impl Default for ConsultationConfig {
    fn default() -> Self {
        Self {
            lawyer_phone: default_lawyer_phone(),
            whatsapp_link: default_whatsapp_link(),
            cost: default_cost(),
            connect_delay_ms: default_connect_delay_ms(),
        }
    }
}

impl ConsultationConfig {
    #[must_use]
    pub const fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ConsultationConfig::default();
        assert_eq!(config.cost, 500);
        assert_eq!(config.connect_delay(), Duration::from_millis(800));
        assert!(config.whatsapp_link.starts_with("https://"));
    }
}
