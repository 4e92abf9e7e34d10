use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Progress status of an activity.
///
/// A flat field, not a workflow: any value is reachable from any other.
/// Persisted records written before the field existed load as `NotStarted`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    #[default]
    #[strum(ascii_case_insensitive, serialize = "not_started")]
    NotStarted,
    #[strum(ascii_case_insensitive, serialize = "in_progress")]
    InProgress,
    #[strum(ascii_case_insensitive, serialize = "completed")]
    Completed,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 3] = [
        ActivityStatus::NotStarted,
        ActivityStatus::InProgress,
        ActivityStatus::Completed,
    ];

    /// Thai label shown on every reporting surface.
    pub fn label_th(&self) -> &'static str {
        match self {
            ActivityStatus::NotStarted => "ยังไม่ได้ดำเนินการ",
            ActivityStatus::InProgress => "กำลังดำเนินการ",
            ActivityStatus::Completed => "เสร็จสิ้น",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_is_not_started() {
        assert_eq!(ActivityStatus::default(), ActivityStatus::NotStarted);
    }

    #[test]
    fn wire_values_are_snake_case() {
        let json = serde_json::to_string(&ActivityStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: ActivityStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, ActivityStatus::Completed);
    }

    #[test]
    fn parses_from_cli_spelling() {
        assert_eq!(
            ActivityStatus::from_str("not_started").unwrap(),
            ActivityStatus::NotStarted
        );
        assert_eq!(
            ActivityStatus::from_str("IN_PROGRESS").unwrap(),
            ActivityStatus::InProgress
        );
        assert!(ActivityStatus::from_str("done").is_err());
    }
}
