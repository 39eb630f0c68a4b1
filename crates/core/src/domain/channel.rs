use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Operator-set liveness of a contact channel. There is no hidden state:
/// an `Away` channel stays listed and can still receive fallback traffic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelStatus {
    #[default]
    #[serde(rename = "online", alias = "available")]
    Available,
    #[serde(alias = "unavailable")]
    Away,
}

impl ChannelStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "online",
            Self::Away => "away",
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "online" | "available" => Ok(Self::Available),
            "away" | "unavailable" => Ok(Self::Away),
            other => Err(DomainError::UnknownChannelStatus(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    /// Dialable address in international form without `+`, e.g. `254759591200`.
    pub address: String,
    pub display: String,
    pub label: String,
    #[serde(default)]
    pub status: ChannelStatus,
}

impl ContactChannel {
    pub fn new(
        address: impl Into<String>,
        display: impl Into<String>,
        label: impl Into<String>,
        status: ChannelStatus,
    ) -> Self {
        Self { address: address.into(), display: display.into(), label: label.into(), status }
    }
}

/// The four sales and support lines the storefront ships with.
pub fn default_roster() -> Vec<ContactChannel> {
    vec![
        ContactChannel::new("254759591200", "0759 591 200", "Sales Team 1", ChannelStatus::Available),
        ContactChannel::new("254706828718", "0706 828 718", "Sales Team 2", ChannelStatus::Available),
        ContactChannel::new("254115054834", "0115 054 834", "Customer Service", ChannelStatus::Away),
        ContactChannel::new("254706624403", "0706 624 403", "Support Team", ChannelStatus::Available),
    ]
}
