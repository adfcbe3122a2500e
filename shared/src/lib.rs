use serde::{Deserialize, Serialize};

pub mod banner;
pub mod pages;

pub use pages::Page;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// One parsed line of the server log file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub service: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_uses_plain_field_names_on_the_wire() {
        let entry = LogEntry {
            timestamp: "2024-05-01 10:00:00".into(),
            level: "INFO".into(),
            service: "backend".into(),
            message: "Starting server".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timestamp"], "2024-05-01 10:00:00");
        assert_eq!(json["level"], "INFO");
        assert_eq!(json["service"], "backend");
        assert_eq!(json["message"], "Starting server");
    }
}
