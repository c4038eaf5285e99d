use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Historical lookback window requested from the upstream chart endpoint.
///
/// The window is an explicit value passed into every history call so tests
/// can supply synthetic windows; the upstream decides how many trading days
/// actually fall inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lookback {
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Lookback {
    pub const ALL: [Self; 5] = [
        Self::FiveDays,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
    ];

    /// Upstream range parameter value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
        }
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::OneMonth
    }
}

impl Display for Lookback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lookback {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "5d" => Ok(Self::FiveDays),
            "1mo" => Ok(Self::OneMonth),
            "3mo" => Ok(Self::ThreeMonths),
            "6mo" => Ok(Self::SixMonths),
            "1y" => Ok(Self::OneYear),
            other => Err(ValidationError::InvalidLookback {
                value: other.to_owned(),
            }),
        }
    }
}
