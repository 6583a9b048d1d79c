//! Recurrence rule enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pattern governing how the next occurrence of a recurring task is computed.
///
/// See [`crate::recurrence`] for the calendar semantics of each rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceRule {
    /// No recurrence
    #[default]
    None,

    /// Every calendar day
    Daily,

    /// Every Monday through Friday
    Weekdays,

    /// Every seven days
    Weekly,

    /// Same day of every month, clamped to the month's length
    Monthly,

    /// Same date every year, Feb 29 clamped to Feb 28
    Yearly,

    /// Every `recurrence_interval_days` days
    Custom,
}

impl FromStr for RecurrenceRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "none" | "never" => Ok(RecurrenceRule::None),
            "daily" => Ok(RecurrenceRule::Daily),
            "weekdays" | "weekdays_only" | "weekday" => Ok(RecurrenceRule::Weekdays),
            "weekly" => Ok(RecurrenceRule::Weekly),
            "monthly" => Ok(RecurrenceRule::Monthly),
            "yearly" | "annually" => Ok(RecurrenceRule::Yearly),
            "custom" => Ok(RecurrenceRule::Custom),
            _ => Err(format!("Invalid recurrence rule: {s}")),
        }
    }
}

impl RecurrenceRule {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceRule::None => "none",
            RecurrenceRule::Daily => "daily",
            RecurrenceRule::Weekdays => "weekdays",
            RecurrenceRule::Weekly => "weekly",
            RecurrenceRule::Monthly => "monthly",
            RecurrenceRule::Yearly => "yearly",
            RecurrenceRule::Custom => "custom",
        }
    }
}
