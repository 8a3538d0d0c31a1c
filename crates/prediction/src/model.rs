use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A delay prediction for a single train, as presented to the rider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayPrediction {
    /// Display form of the train number, e.g. "Train 205".
    pub train_number: String,

    /// Arrival time formatted as `hh:mm AM/PM`.
    pub eta: String,

    pub delay_minutes: u32,
    pub risk_level: RiskLevel,
    pub cause: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,

    #[serde(default)]
    pub alternatives: Vec<Alternative>,

    #[serde(rename = "hasGPSData")]
    pub has_gps_data: bool,

    pub has_weather_data: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Coarse delay severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Risk derived from the expected delay: more than 18 minutes is high,
    /// more than 10 is medium.
    ///
    /// Only synthesized predictions use this rule. Scenario table entries keep
    /// their own risk level.
    #[must_use]
    pub const fn from_delay(delay_minutes: u32) -> Self {
        if delay_minutes > 18 {
            Self::High
        } else if delay_minutes > 10 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Another way to reach the destination when the train is running late.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    #[serde(rename = "type")]
    pub kind: AlternativeKind,
    pub name: String,
    pub wait_time: String,
}

impl Alternative {
    #[must_use]
    pub fn bus(name: impl Into<String>, wait_time: impl Into<String>) -> Self {
        Self { kind: AlternativeKind::Bus, name: name.into(), wait_time: wait_time.into() }
    }

    #[must_use]
    pub fn train(name: impl Into<String>, wait_time: impl Into<String>) -> Self {
        Self { kind: AlternativeKind::Train, name: name.into(), wait_time: wait_time.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlternativeKind {
    Bus,
    Train,
}
